use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddressWithName(pub lettre::message::Mailbox);

impl FromStr for EmailAddressWithName {
    type Err = <lettre::message::Mailbox as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_display_name() {
        let mailbox = "Contacto <contacto@example.com>"
            .parse::<EmailAddressWithName>()
            .unwrap();

        assert_eq!(mailbox.0.name.as_deref(), Some("Contacto"));
        assert_eq!(mailbox.0.email.to_string(), "contacto@example.com");
    }

    #[test]
    fn parse_bare_address() {
        let mailbox = "contacto@example.com"
            .parse::<EmailAddressWithName>()
            .unwrap();

        assert_eq!(mailbox.0.name, None);
        assert_eq!(mailbox.0.email.to_string(), "contacto@example.com");
    }
}
