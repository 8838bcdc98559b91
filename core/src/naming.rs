//! Deterministic name and region generation from curated lists.
//!
//! Same RNG seed = same names. The lists are static so the generated
//! tables stay stable across builds.

use crate::rng::StageRng;

pub struct NameGenerator;

impl NameGenerator {
    /// Generate a full name (first + last) deterministically.
    pub fn full_name(rng: &mut StageRng) -> String {
        let first = Self::pick(rng, Self::first_names());
        let last = Self::pick(rng, Self::last_names());
        format!("{} {}", first, last)
    }

    /// Generate a country-like region string.
    pub fn region(rng: &mut StageRng) -> String {
        Self::pick(rng, Self::regions()).to_string()
    }

    fn pick(rng: &mut StageRng, list: &'static [&'static str]) -> &'static str {
        list[rng.next_u64_below(list.len() as u64) as usize]
    }

    fn first_names() -> &'static [&'static str] {
        &[
            "Ada", "Aiden", "Alma", "Amara", "Anders", "Anika", "Aria", "Arjun",
            "Astrid", "Beatriz", "Bianca", "Bruno", "Callum", "Camila", "Cedric",
            "Chiara", "Clara", "Dario", "Deepa", "Dmitri", "Eleanor", "Elias",
            "Elif", "Emeka", "Esme", "Felix", "Fiona", "Freya", "Gabriel",
            "Greta", "Hana", "Hassan", "Hugo", "Ines", "Ingrid", "Isaac",
            "Ivana", "Jonas", "Julien", "Kaito", "Katarina", "Kofi", "Lars",
            "Leila", "Leon", "Liam", "Lucia", "Magnus", "Maren", "Marco",
            "Mateo", "Maya", "Mei", "Milan", "Mina", "Nadia", "Naomi",
            "Nikolai", "Noor", "Oisin", "Olga", "Omar", "Paloma", "Pavel",
            "Priya", "Rafael", "Rania", "Ravi", "Renata", "Rosa", "Ruben",
            "Saoirse", "Selma", "Soren", "Stella", "Tariq", "Thea", "Tomas",
            "Valentina", "Viktor", "Wren", "Xiomara", "Yara", "Yusuf", "Zainab",
        ]
    }

    fn last_names() -> &'static [&'static str] {
        &[
            "Abara", "Almeida", "Andersen", "Araya", "Bakker", "Baptiste",
            "Barros", "Bergstrom", "Bianchi", "Calloway", "Castellano", "Chowdhury",
            "Dahl", "Delacroix", "Dimitrov", "Duarte", "Eriksen", "Esposito",
            "Farrell", "Ferreira", "Fontaine", "Fujimoto", "Galvan", "Haddad",
            "Halvorsen", "Hargreaves", "Holm", "Ibarra", "Iqbal", "Ivanov",
            "Jansen", "Kalu", "Kaur", "Keller", "Kimura", "Kowalski", "Kristensen",
            "Laurent", "Lindqvist", "Lombardi", "Macdonald", "Marchetti",
            "Mbeki", "Mendes", "Moreau", "Nakamura", "Navarro", "Nowak",
            "Obi", "Okafor", "Olsen", "Ortega", "Petrov", "Quintero", "Rahman",
            "Rasmussen", "Ricci", "Rojas", "Rousseau", "Salim", "Santos",
            "Schneider", "Silva", "Sorensen", "Takahashi", "Tanaka", "Teixeira",
            "Ueda", "Vasiliev", "Vega", "Verhoeven", "Virtanen", "Weber",
            "Whitfield", "Yamamoto", "Zielinski", "Zhou",
        ]
    }

    fn regions() -> &'static [&'static str] {
        &[
            "Argentina", "Australia", "Austria", "Belgium", "Brazil", "Canada",
            "Chile", "Colombia", "Croatia", "Czechia", "Denmark", "Egypt",
            "Estonia", "Finland", "France", "Germany", "Ghana", "Greece",
            "Hungary", "Iceland", "India", "Indonesia", "Ireland", "Italy",
            "Japan", "Kenya", "Latvia", "Lithuania", "Malaysia", "Mexico",
            "Morocco", "Netherlands", "New Zealand", "Nigeria", "Norway",
            "Peru", "Philippines", "Poland", "Portugal", "Romania", "Senegal",
            "Singapore", "Slovakia", "Slovenia", "South Africa", "South Korea",
            "Spain", "Sweden", "Switzerland", "Thailand", "Turkey", "Ukraine",
            "United Kingdom", "United States", "Uruguay", "Vietnam",
        ]
    }
}
