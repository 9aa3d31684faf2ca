use serde::Serialize;

/// Number of daily-living activities on the government form.
pub const ACTIVITY_COUNT: usize = 32;

/// One catalog position: ordinal (1-based, as printed on the form), the
/// activity name, and the explanatory text from the regulation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CatalogEntry {
    pub ordinal: usize,
    pub name: &'static str,
    pub description: &'static str,
}

/// Activity name for a zero-based catalog index.
pub fn name(index: usize) -> Option<&'static str> {
    ACTIVITIES.get(index).copied()
}

/// Regulation description for a zero-based catalog index.
pub fn description(index: usize) -> Option<&'static str> {
    ACTIVITY_DESCRIPTIONS.get(index).copied()
}

/// All 32 catalog entries in form order.
pub fn entries() -> impl Iterator<Item = CatalogEntry> {
    ACTIVITIES
        .iter()
        .copied()
        .zip(ACTIVITY_DESCRIPTIONS.iter().copied())
        .enumerate()
        .map(|(index, (name, description))| CatalogEntry {
            ordinal: index + 1,
            name,
            description,
        })
}

/// The fixed, ordered list of assessed activities. Wording follows the
/// annex to the 23 November 2023 regulation (Dz.U. z 2023 r. poz. 2581).
pub(crate) const ACTIVITIES: [&str; ACTIVITY_COUNT] = [
    "Zmiana pozycji ciała",
    "Poruszanie się w znanym środowisku",
    "Poruszanie się w nieznanym środowisku",
    "Sięganie, chwytanie i manipulowanie przedmiotami",
    "Przemieszczanie się środkami transportu",
    "Klasyfikacja docierających bodźców",
    "Przekazywanie informacji innym osobom",
    "Prowadzenie rozmowy",
    "Opanowanie nowej umiejętności praktycznej",
    "Koncentrowanie się na czynności",
    "Korzystanie z urządzeń informacyjno-komunikacyjnych",
    "Mycie i osuszanie całego ciała",
    "Mycie i osuszanie rąk i twarzy",
    "Pielęgnowanie poszczególnych części ciała",
    "Troska o własne zdrowie",
    "Korzystanie z toalety",
    "Ubieranie się",
    "Jedzenie i picie",
    "Stosowanie zalecanych środków terapeutycznych",
    "Realizowanie wyborów i decyzji",
    "Pozostawanie w domu samemu",
    "Nawiązywanie kontaktów",
    "Kontrolowanie własnych zachowań i emocji",
    "Utrzymywanie kontaktów z bliskimi",
    "Tworzenie bliskich relacji",
    "Kupowanie produktów",
    "Przygotowywanie posiłków",
    "Dbanie o dom, ubranie i obuwie",
    "Dokonywanie transakcji finansowych",
    "Rekreacja i organizacja czasu wolnego",
    "Załatwianie spraw urzędowych",
    "Realizowanie codziennego harmonogramu",
];

/// Explanatory descriptions, parallel to [`ACTIVITIES`].
pub(crate) const ACTIVITY_DESCRIPTIONS: [&str; ACTIVITY_COUNT] = [
    "Ocenie podlega zdolność osoby do dokonywania dowolnej zmiany pozycji swojego ciała w przestrzeni, w tym zdolności do przyjmowania i powrotu do pozycji stojącej, siedzącej lub leżącej oraz przyjmowania, i powrotu do, spoczynkowej pozycji ciała.",
    "Ocenie podlega zdolność osoby do chodzenia i poruszania się w obrębie mieszkania lub domu, z uwzględnieniem wchodzenia i schodzenia ze schodów, docierania do wszystkich pomieszczeń w zamieszkiwanym mieszkaniu lub domu oraz poruszania się w bezpośrednim otoczeniu mieszkania lub domu.",
    "Ocenie podlega zdolność osoby do poruszania się w mieszkaniu lub domu innej osoby, budynkach użyteczności publicznej i na zewnątrz tych budynków oraz zdolności do pokonywania barier architektonicznych i omijania przeszkód zlokalizowanych w nieznanym jej środowisku.",
    "Ocenie podlega zdolność osoby do precyzyjnego używania ręki, w tym do chwytania, manipulowania, wypuszczania i odstawiania przedmiotów na miejsce w domu i poza nim, wykonywania precyzyjnych ruchów palcami rąk oraz zdolności do omijania przeszkód podczas wykonywania tych czynności.",
    "Ocenie podlega zdolność osoby do przemieszczania się różnymi środkami transportu jako pasażer podczas przejazdu samochodem oraz korzystania ze środków transportu publicznego, takich jak w szczególności taksówka, autobus, pociąg, samolot, w tym również podczas dużego natężenia ruchu.",
    "Ocenie podlega zdolność osoby do rozumienia znaczenia bodźców, komunikatów oraz informacji docierających do tej osoby różnymi kanałami komunikacji, na przykład przez przekaz mówiony, pisany lub gesty, zdolności do identyfikacji źródła docierającego bodźca oraz oceny bodźca pod względem jego bezpieczeństwa dla osoby.",
    "Ocenie podlega zdolność osoby do logicznego, zwięzłego i zrozumiałego przekazania innym osobom posiadanych informacji za pomocą dowolnego kanału komunikacji, w szczególności przez mowę, gesty lub pismo, w tym również informacji dotyczących własnych potrzeb, dolegliwości lub samopoczucia.",
    "Ocenie podlega zdolność osoby do inicjowania, kontynuowania i zakończenia rozmowy lub wymiany informacji z jedną osobą oraz z więcej niż jedną osobą, w tym zdolności do wprowadzania nowych tematów i poglądów lub nawiązywania do tematów poruszanych przez innych, za pomocą powszechnie obowiązującego w społeczeństwie sposobu komunikacji.",
    "Ocenie podlega zdolność osoby do opanowania, podjęcia i przeprowadzenia do końca nieposiadanej wcześniej, nowej umiejętności praktycznej, związanej z codziennym funkcjonowaniem lub opanowania nowego zachowania.",
    "Ocenie podlega zdolność osoby do celowego skupienia uwagi na wykonywaniu określonej czynności, skierowania uwagi na określony bodziec i utrzymywania jej w czasie, w tym również zdolności do przerzutności i podzielności uwagi.",
    "Ocenie podlega zdolność osoby do korzystania z technologii, wykorzystywanych do rozwiązywania problemów, ułatwienia codziennego funkcjonowania, usprawnienia pracy albo edukacji oraz zwiększenia wydajności i jakości usług, w tym w szczególności umiejętności korzystania z radia, telewizora, komputera, Internetu, telefonu komórkowego.",
    "Ocenie podlega zdolność osoby do umycia całego ciała, z użyciem wody i odpowiednich środków czyszczących, w szczególności mydła lub płynu do kąpieli oraz osuszenia całego ciała z użyciem ręcznika, w domu i poza domem.",
    "Ocenie podlega zdolność osoby do umycia rąk i twarzy przy użyciu wody oraz odpowiednich środków czyszczących, takich jak na przykład mydło lub żel do mycia twarzy oraz osuszeniu rąk i twarzy z użyciem ręcznika w domu i poza domem.",
    "Ocenie podlega zdolność osoby do pielęgnowania części ciała, w szczególności skóry ciała i głowy, zębów, paznokci dłoni i stóp, genitaliów, które wymagają więcej odpowiednich zabiegów pielęgnacyjnych, innych niż mycie i suszenie.",
    "Ocenie podlega zdolność osoby do dbania o toaletę, w tym w szczególności o higienę w zakresie oddawania moczu i stolca, z uwzględnieniem dbania o higienę podczas menstruacji u kobiet oraz utrzymywania czystości po wykonaniu tych czynności.",
    "Ocenie podlega zdolność osoby do ubierania i rozbierania się, zakładania i zdejmowania nakrycia głowy, obuwia, rękawiczek, okularów oraz innych akcesoriów, w domu i poza domem.",
    "Ocenie podlega zdolność osoby do dbania o swoje zdrowie poprzez przestrzeganie zaleceń lekarskich, w tym zaleceń dotyczących trybu życia oraz przyjmowania leków zgodnie z zaleceniem lekarskim, rozpoznawania objawów choroby i właściwego reagowania na nie.",
    "Ocenie podlega zdolność osoby do unikania niebezpieczeństw i zagrożeń oraz unikania krzywdy podczas wykonywania różnorodnych czynności w domu i poza nim.",
    "Ocenie podlega zdolność osoby do przygotowywania prostych posiłków, to jest takich, które nie wymagają gotowania, oraz posiłków, które wymagają gotowania, w tym zdolność do planowania posiłków zgodnie z właściwymi zasadami żywienia.",
    "Ocenie podlega zdolność osoby do spożywania pokarmów podanych w sposób kulturowo i społecznie przyjęty oraz do picia płynów.",
    "Ocenie podlega zdolność osoby do planowania, organizowania i wykonywania czynności związanych z bieżącym sprzątaniem miejsca zamieszkania, praniem oraz prasowaniem odzieży i innych rzeczy.",
    "Ocenie podlega zdolność osoby do planowania i dokonywania zakupów towarów i usług codziennego użytku oraz do dokonywania płatności za towary i usługi różnymi sposobami.",
    "Ocenie podlega zdolność osoby do planowania, organizowania i nadzorowania prac związanych z utrzymaniem miejsca zamieszkania oraz do korzystania z usług innych osób.",
    "Ocenie podlega zdolność osoby do nawiązywania, utrzymywania i rozwijania więzi z członkami rodziny, z uwzględnieniem więzi partnerskich i więzi między rodzicami a dziećmi.",
    "Ocenie podlega zdolność osoby do nawiązywania, utrzymywania i kończenia kontaktów z innymi osobami w odpowiednim kontekście społecznym w sposób społecznie i kulturowo właściwy oraz zdolność do utrzymywania odpowiedniego dystansu społecznego.",
    "Ocenie podlega zdolność osoby do zachowywania się w sposób odpowiadający oczekiwaniom i wymaganiom występującym w określonych sytuacjach społecznych oraz zdolność do dostosowywania swojego zachowania do oczekiwań społecznych.",
    "Ocenie podlega zdolność osoby do bycia odpowiedzialnym za własne działania oraz do rozumienia i stosowania się do zasad społecznych dotyczących zachowań oraz zdolność do kierowania własnym zachowaniem.",
    "Ocenie podlega zdolność osoby do podejmowania decyzji dotyczących codziennego życia oraz zdolność do planowania i realizowania swoich działań.",
    "Ocenie podlega zdolność osoby do radzenia sobie z obowiązkami, ze stresem związanym z wykonywaniem zadań oraz z innymi obciążeniami psychicznymi, w tym zdolność do radzenia sobie z niepowodzeniami i porażkami.",
    "Ocenie podlega zdolność osoby do wykonywania pracy, w tym w szczególności do uzyskiwania, utrzymywania i kończenia pracy zgodnie z wymogami tej pracy, a także zdolność do współpracy z innymi pracownikami oraz przełożonymi i do wykonywania pracy zgodnie z jej zakresem.",
    "Ocenie podlega zdolność osoby do uczestniczenia w życiu społeczności lokalnej oraz korzystania z usług dostępnych w społeczności lokalnej, w tym w szczególności usług dostępnych w instytucjach publicznych i niepublicznych.",
    "Ocenie podlega zdolność osoby do uczestniczenia w różnego rodzaju formach rekreacji i wypoczynku, dostępnych w miejscu zamieszkania osoby oraz poza miejscem zamieszkania.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_holds_exactly_32_parallel_entries() {
        assert_eq!(ACTIVITIES.len(), ACTIVITY_COUNT);
        assert_eq!(ACTIVITY_DESCRIPTIONS.len(), ACTIVITY_COUNT);
        assert_eq!(entries().count(), ACTIVITY_COUNT);
    }

    #[test]
    fn lookups_are_bounded() {
        assert_eq!(name(0), Some("Zmiana pozycji ciała"));
        assert!(name(ACTIVITY_COUNT - 1).is_some());
        assert_eq!(name(ACTIVITY_COUNT), None);
        assert!(description(5).is_some_and(|text| text.starts_with("Ocenie podlega")));
    }

    #[test]
    fn ordinals_are_one_based_and_sequential() {
        let entries: Vec<_> = entries().collect();
        assert_eq!(entries[0].ordinal, 1);
        assert_eq!(entries[31].ordinal, 32);
        assert_eq!(entries[31].name, "Realizowanie codziennego harmonogramu");
    }
}
