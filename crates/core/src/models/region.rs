use serde::{Deserialize, Serialize};

/// A coarse location filter: one of Brazil's five macro-regions, or the
/// whole-country sentinel that disables the restriction.
///
/// Each region is a fixed group of state names; a purchase location
/// passes the filter when it belongs to the selected group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    /// Sentinel: no regional restriction
    #[default]
    WholeCountry,
    CentroOeste,
    Nordeste,
    Norte,
    Sudeste,
    Sul,
}

impl Region {
    /// Every selectable value, sentinel first (sidebar ordering).
    pub const ALL: [Region; 6] = [
        Region::WholeCountry,
        Region::CentroOeste,
        Region::Nordeste,
        Region::Norte,
        Region::Sudeste,
        Region::Sul,
    ];

    /// The state names grouped under this region.
    /// Empty for the whole-country sentinel.
    pub fn states(&self) -> &'static [&'static str] {
        match self {
            Region::WholeCountry => &[],
            Region::CentroOeste => &[
                "Distrito Federal",
                "Goiás",
                "Mato Grosso",
                "Mato Grosso do Sul",
            ],
            Region::Nordeste => &[
                "Alagoas",
                "Bahia",
                "Ceará",
                "Maranhão",
                "Paraíba",
                "Pernambuco",
                "Piauí",
                "Rio Grande do Norte",
                "Sergipe",
            ],
            Region::Norte => &[
                "Acre",
                "Amapá",
                "Amazonas",
                "Pará",
                "Rondônia",
                "Roraima",
                "Tocantins",
            ],
            Region::Sudeste => &[
                "Espírito Santo",
                "Minas Gerais",
                "Rio de Janeiro",
                "São Paulo",
            ],
            Region::Sul => &["Paraná", "Rio Grande do Sul", "Santa Catarina"],
        }
    }

    /// Membership test for a purchase location.
    /// The whole-country sentinel admits every location.
    pub fn contains(&self, location: &str) -> bool {
        match self {
            Region::WholeCountry => true,
            _ => self.states().iter().any(|state| *state == location),
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Region::WholeCountry => write!(f, "Brasil"),
            Region::CentroOeste => write!(f, "Centro-Oeste"),
            Region::Nordeste => write!(f, "Nordeste"),
            Region::Norte => write!(f, "Norte"),
            Region::Sudeste => write!(f, "Sudeste"),
            Region::Sul => write!(f, "Sul"),
        }
    }
}

/// Year restriction for the sidebar slider.
/// `AllYears` is the sentinel that disables it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum YearFilter {
    #[default]
    AllYears,
    Year(i32),
}

impl YearFilter {
    /// True when a purchase in `year` passes this filter.
    pub fn matches(&self, year: i32) -> bool {
        match self {
            YearFilter::AllYears => true,
            YearFilter::Year(selected) => *selected == year,
        }
    }
}
