use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CookieCategory {
    Necessary,
    Analytics,
    Marketing,
    Functional,
}

impl CookieCategory {
    pub const ALL: [CookieCategory; 4] = [
        CookieCategory::Necessary,
        CookieCategory::Analytics,
        CookieCategory::Marketing,
        CookieCategory::Functional,
    ];
}

/// Visitor consent for the optional cookie categories.
///
/// Necessary cookies cannot be switched off, so they are not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CookiePreferences {
    pub analytics: bool,
    pub marketing: bool,
    pub functional: bool,
}

impl CookiePreferences {
    pub fn with_analytics(self, analytics: bool) -> Self {
        Self { analytics, ..self }
    }

    pub fn with_marketing(self, marketing: bool) -> Self {
        Self { marketing, ..self }
    }

    pub fn with_functional(self, functional: bool) -> Self {
        Self { functional, ..self }
    }

    pub fn accept_all() -> Self {
        Self {
            analytics: true,
            marketing: true,
            functional: true,
        }
    }

    pub fn reject_all() -> Self {
        Self::default()
    }

    pub fn allows(self, category: CookieCategory) -> bool {
        match category {
            CookieCategory::Necessary => true,
            CookieCategory::Analytics => self.analytics,
            CookieCategory::Marketing => self.marketing,
            CookieCategory::Functional => self.functional,
        }
    }
}
