//! Spell attributes and their mapping onto sigil parameters.
//!
//! A spell is described by six attributes. Each attribute becomes one sigil
//! whose polygon has `multiplier × value` sides and density `value`:
//!
//! | Attribute | Multiplier | Slot |
//! |-----------|-----------:|-----:|
//! | school    | 2 | 0 |
//! | range     | 3 | 1 |
//! | duration  | 4 | 2 |
//! | size      | 5 | 3 |
//! | speed     | 6 | 4 |
//! | potency   | 7 | 5 |
//!
//! The school is named rather than numbered; [`School`] maps the nine
//! recognised names (including no school at all) onto indices 0 through 8.

use std::{fmt, str::FromStr};

use arcanum_core::shape::MAX_SIDES;

use crate::ArcanumError;

/// A school of magic.
///
/// A spell without a school has school index 0, which is represented as
/// `Option::<School>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum School {
    Divination = 1,
    Elementalism = 2,
    Abjuration = 3,
    Illusion = 4,
    Restoration = 5,
    Conjuration = 6,
    Necromancy = 7,
    Evocation = 8,
}

impl School {
    /// Every school, ordered by index.
    pub const ALL: [School; 8] = [
        Self::Divination,
        Self::Elementalism,
        Self::Abjuration,
        Self::Illusion,
        Self::Restoration,
        Self::Conjuration,
        Self::Necromancy,
        Self::Evocation,
    ];

    /// The lowercase name used in spellbooks.
    pub fn name(self) -> &'static str {
        match self {
            Self::Divination => "divination",
            Self::Elementalism => "elementalism",
            Self::Abjuration => "abjuration",
            Self::Illusion => "illusion",
            Self::Restoration => "restoration",
            Self::Conjuration => "conjuration",
            Self::Necromancy => "necromancy",
            Self::Evocation => "evocation",
        }
    }

    /// The school's attribute value, 1 through 8.
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Looks up an optional school name; `None` means no school.
    ///
    /// # Errors
    ///
    /// Returns [`ArcanumError::UnknownSchool`] for names outside the fixed set.
    pub fn from_name(name: Option<&str>) -> Result<Option<Self>, ArcanumError> {
        name.map(str::parse::<Self>).transpose()
    }
}

impl FromStr for School {
    type Err = ArcanumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|school| school.name() == s)
            .ok_or_else(|| ArcanumError::UnknownSchool(s.to_string()))
    }
}

impl fmt::Display for School {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the six attributes of a spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    School,
    Range,
    Duration,
    Size,
    Speed,
    Potency,
}

impl Attribute {
    /// Every attribute in slot (and draw) order.
    pub const ALL: [Attribute; 6] = [
        Self::School,
        Self::Range,
        Self::Duration,
        Self::Size,
        Self::Speed,
        Self::Potency,
    ];

    /// Sides per unit of attribute value.
    pub fn multiplier(self) -> u32 {
        self.slot() as u32 + 2
    }

    /// Position of this attribute's sigil around the central circle.
    pub fn slot(self) -> usize {
        match self {
            Self::School => 0,
            Self::Range => 1,
            Self::Duration => 2,
            Self::Size => 3,
            Self::Speed => 4,
            Self::Potency => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::School => "school",
            Self::Range => "range",
            Self::Duration => "duration",
            Self::Size => "size",
            Self::Speed => "speed",
            Self::Potency => "potency",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The six attribute values of a spell.
///
/// Values are unsigned: an attribute of 0 yields a sigil with an empty
/// polygon, and negative values cannot be expressed.
///
/// # Examples
///
/// ```
/// use arcanum::spell::{Attribute, School, SpellAttributes};
///
/// let wall_of_fire = SpellAttributes::new(Some(School::Evocation), 2, 2, 5, 0, 4);
/// assert_eq!(wall_of_fire.school_index(), 8);
/// assert_eq!(wall_of_fire.sigil_parameters(Attribute::Size).unwrap(), (25, 5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpellAttributes {
    school: Option<School>,
    range: u32,
    duration: u32,
    size: u32,
    speed: u32,
    potency: u32,
}

impl SpellAttributes {
    pub fn new(
        school: Option<School>,
        range: u32,
        duration: u32,
        size: u32,
        speed: u32,
        potency: u32,
    ) -> Self {
        Self {
            school,
            range,
            duration,
            size,
            speed,
            potency,
        }
    }

    /// Replaces the school by looking up `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ArcanumError::UnknownSchool`] if `name` is not a recognised school.
    pub fn with_school_name(mut self, name: Option<&str>) -> Result<Self, ArcanumError> {
        self.school = School::from_name(name)?;
        Ok(self)
    }

    pub fn school(&self) -> Option<School> {
        self.school
    }

    /// The school as a number, 0 when the spell has no school.
    pub fn school_index(&self) -> u32 {
        self.school.map_or(0, School::index)
    }

    /// The numeric value of `attribute`.
    pub fn value(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::School => self.school_index(),
            Attribute::Range => self.range,
            Attribute::Duration => self.duration,
            Attribute::Size => self.size,
            Attribute::Speed => self.speed,
            Attribute::Potency => self.potency,
        }
    }

    /// The `(sides, density)` of the polygon drawn for `attribute`.
    ///
    /// # Errors
    ///
    /// Returns [`ArcanumError::AttributeTooLarge`] if `multiplier · value`
    /// exceeds [`MAX_SIDES`].
    pub fn sigil_parameters(&self, attribute: Attribute) -> Result<(u32, u32), ArcanumError> {
        let value = self.value(attribute);
        attribute
            .multiplier()
            .checked_mul(value)
            .filter(|&sides| sides <= MAX_SIDES)
            .map(|sides| (sides, value))
            .ok_or(ArcanumError::AttributeTooLarge { attribute, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_school_lookup() {
        assert_eq!(School::from_name(None).unwrap(), None);
        assert_eq!(
            School::from_name(Some("divination")).unwrap(),
            Some(School::Divination)
        );
        assert_eq!("necromancy".parse::<School>().unwrap().index(), 7);
        assert_eq!("evocation".parse::<School>().unwrap().index(), 8);
    }

    #[test]
    fn test_unknown_school() {
        let err = School::from_name(Some("unknown_school")).unwrap_err();
        assert!(matches!(err, ArcanumError::UnknownSchool(ref name) if name == "unknown_school"));

        // names are matched exactly
        assert!("Necromancy".parse::<School>().is_err());
    }

    #[test]
    fn test_school_indices_are_sequential() {
        for (i, school) in School::ALL.into_iter().enumerate() {
            assert_eq!(school.index() as usize, i + 1);
            assert_eq!(school.name().parse::<School>().unwrap(), school);
        }
    }

    #[test]
    fn test_attribute_multipliers() {
        let multipliers: Vec<_> = Attribute::ALL.iter().map(|a| a.multiplier()).collect();
        assert_eq!(multipliers, vec![2, 3, 4, 5, 6, 7]);

        let slots: Vec<_> = Attribute::ALL.iter().map(|a| a.slot()).collect();
        assert_eq!(slots, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_sigil_parameters() {
        let magic_missile = SpellAttributes::new(None, 3, 1, 1, 4, 1);

        assert_eq!(magic_missile.school_index(), 0);
        assert_eq!(magic_missile.sigil_parameters(Attribute::School).unwrap(), (0, 0));
        assert_eq!(magic_missile.sigil_parameters(Attribute::Range).unwrap(), (9, 3));
        assert_eq!(magic_missile.sigil_parameters(Attribute::Duration).unwrap(), (4, 1));
        assert_eq!(magic_missile.sigil_parameters(Attribute::Size).unwrap(), (5, 1));
        assert_eq!(magic_missile.sigil_parameters(Attribute::Speed).unwrap(), (24, 4));
        assert_eq!(magic_missile.sigil_parameters(Attribute::Potency).unwrap(), (7, 1));
    }

    #[test]
    fn test_oversized_attribute_is_rejected() {
        // 7 · u32::MAX overflows and must not clamp to u32::MAX sides
        let overflowing = SpellAttributes::new(None, 0, 0, 0, 0, u32::MAX);
        assert!(matches!(
            overflowing.sigil_parameters(Attribute::Potency),
            Err(ArcanumError::AttributeTooLarge {
                attribute: Attribute::Potency,
                value: u32::MAX,
            })
        ));

        let largest = MAX_SIDES / Attribute::Speed.multiplier();
        let spell = SpellAttributes::new(None, 0, 0, 0, largest, 0);
        assert_eq!(
            spell.sigil_parameters(Attribute::Speed).unwrap(),
            (largest * 6, largest)
        );

        let spell = SpellAttributes::new(None, 0, 0, 0, largest + 1, 0);
        let err = spell.sigil_parameters(Attribute::Speed).unwrap_err();
        assert!(err.to_string().contains("speed"));
    }

    #[test]
    fn test_with_school_name() {
        let spell = SpellAttributes::default()
            .with_school_name(Some("conjuration"))
            .unwrap();
        assert_eq!(spell.school(), Some(School::Conjuration));
        assert_eq!(spell.sigil_parameters(Attribute::School).unwrap(), (12, 6));

        assert!(
            SpellAttributes::default()
                .with_school_name(Some("alchemy"))
                .is_err()
        );
    }
}
