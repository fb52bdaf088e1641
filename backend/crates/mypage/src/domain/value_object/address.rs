//! Member Address Value Object
//!
//! An address is three ordered parts: postcode, road address, detail.
//!
//! Two encodings exist:
//! - **form value**: the parts joined by `,` as the profile form submits
//!   them. Three empty parts give [`EMPTY_ADDRESS_FORM`] (`",,"`), which
//!   means "no address".
//! - **stored value**: the parts joined by [`ADDRESS_DELIMITER`] (`"^^^"`),
//!   a sequence not expected in real address text.

use std::fmt;

/// Separator between parts in the stored column
pub const ADDRESS_DELIMITER: &str = "^^^";

/// Form value submitted when every part is empty
pub const EMPTY_ADDRESS_FORM: &str = ",,";

/// Separator between parts in the form value
const FORM_DELIMITER: &str = ",";

/// The three address parts, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressParts([String; 3]);

impl AddressParts {
    pub fn new(
        postcode: impl Into<String>,
        road: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self([postcode.into(), road.into(), detail.into()])
    }

    pub fn postcode(&self) -> &str {
        &self.0[0]
    }

    pub fn road(&self) -> &str {
        &self.0[1]
    }

    pub fn detail(&self) -> &str {
        &self.0[2]
    }

    /// Parts joined the way the profile form submits them
    pub fn to_form_value(&self) -> String {
        self.0.join(FORM_DELIMITER)
    }

    /// Parts joined for the `member_address` column
    ///
    /// ```
    /// use mypage::domain::value_object::address::AddressParts;
    ///
    /// let parts = AddressParts::new("12345", "Main St", "Apt 2");
    /// assert_eq!(parts.to_stored(), "12345^^^Main St^^^Apt 2");
    /// ```
    pub fn to_stored(&self) -> String {
        self.0.join(ADDRESS_DELIMITER)
    }

    /// Split a stored value back into its parts.
    ///
    /// `None` unless the value holds exactly three parts.
    pub fn from_stored(stored: &str) -> Option<Self> {
        let mut split = stored.split(ADDRESS_DELIMITER);
        let parts = [split.next()?, split.next()?, split.next()?];
        if split.next().is_some() {
            return None;
        }
        Some(Self(parts.map(str::to_owned)))
    }
}

impl From<[String; 3]> for AddressParts {
    fn from(parts: [String; 3]) -> Self {
        Self(parts)
    }
}

impl fmt::Display for AddressParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {} {}", self.postcode(), self.road(), self.detail())
    }
}

/// True when a form value means "no address"
pub fn is_empty_form_value(form_value: &str) -> bool {
    form_value == EMPTY_ADDRESS_FORM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_value_keeps_order() {
        let parts = AddressParts::new("12345", "Main St", "Apt 2");
        assert_eq!(parts.to_stored(), "12345^^^Main St^^^Apt 2");
        assert_eq!(parts.to_form_value(), "12345,Main St,Apt 2");
    }

    #[test]
    fn test_stored_value_roundtrips_with_empty_parts() {
        let samples = [
            AddressParts::new("04524", "", ""),
            AddressParts::new("", "Sejong-daero 110", ""),
            AddressParts::new("", "", "Room 3, 2nd floor"),
            AddressParts::new("06236", "Teheran-ro 14-gil 6", "Namdo Bldg 2F"),
        ];
        for parts in samples {
            let stored = parts.to_stored();
            assert_eq!(AddressParts::from_stored(&stored), Some(parts));
        }
    }

    #[test]
    fn test_only_all_empty_parts_give_empty_form_value() {
        assert!(is_empty_form_value(&AddressParts::default().to_form_value()));
        assert!(!is_empty_form_value(&AddressParts::new(",", "", "").to_form_value()));
        assert!(!is_empty_form_value(&AddressParts::new("1", "", "").to_form_value()));
    }

    #[test]
    fn test_from_stored_rejects_wrong_part_count() {
        assert_eq!(AddressParts::from_stored("only one"), None);
        assert_eq!(AddressParts::from_stored("a^^^b"), None);
        assert_eq!(AddressParts::from_stored("a^^^b^^^c^^^d"), None);
    }
}
