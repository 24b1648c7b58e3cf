use strum_macros::{Display, EnumString};

/// Directory role as stored in the `role` column. The Turkish aliases are
/// accepted on parse so bulk-imported sheets keep working.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Display, EnumString)]
pub enum Role {
    #[strum(to_string = "personnel", serialize = "Personel")]
    Personnel,
    #[strum(to_string = "manager", serialize = "Yönetici")]
    Manager,
    #[strum(to_string = "hr", serialize = "İK")]
    Hr,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Personnel => "personnel",
            Role::Manager => "manager",
            Role::Hr => "hr",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_and_imported_forms() {
        assert_eq!("manager".parse::<Role>().unwrap(), Role::Manager);
        assert_eq!("Yönetici".parse::<Role>().unwrap(), Role::Manager);
        assert_eq!("İK".parse::<Role>().unwrap(), Role::Hr);
        assert_eq!("Personel".parse::<Role>().unwrap(), Role::Personnel);
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn display_matches_stored_form() {
        assert_eq!(Role::Hr.to_string(), "hr");
        assert_eq!(Role::Manager.as_str(), "manager");
    }
}
