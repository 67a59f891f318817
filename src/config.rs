/// Identifiers the consuming system defines below the property space.
///
/// These slots are never handed out to compiled properties. The consumer's
/// property enum must declare exactly these sentinels, in this order, before
/// the first compiled property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedSlot {
    /// `CSSPropertyInvalid`
    Invalid = 0,
    /// `CSSPropertyApplyAtRule`
    ApplyAtRule = 1,
    /// `CSSPropertyVariable`
    Variable = 2,
}

impl ReservedSlot {
    pub const ALL: [ReservedSlot; 3] = [
        ReservedSlot::Invalid,
        ReservedSlot::ApplyAtRule,
        ReservedSlot::Variable,
    ];

    pub fn value(self) -> u16 {
        self as u16
    }

    /// Symbolic name the consumer uses for this slot
    pub fn symbol(self) -> &'static str {
        match self {
            ReservedSlot::Invalid => "CSSPropertyInvalid",
            ReservedSlot::ApplyAtRule => "CSSPropertyApplyAtRule",
            ReservedSlot::Variable => "CSSPropertyVariable",
        }
    }
}

/// First enum value available to compiled properties.
pub const FIRST_ENUM_VALUE: u16 = ReservedSlot::ALL.len() as u16;

/// Offset added to a property's enum value to obtain its alias's enum value.
pub const ALIAS_OFFSET: u16 = 512;

/// Exclusive upper bound for base property enum values.
pub const PROPERTY_CAPACITY: u16 = 512;

const _: () = assert!(FIRST_ENUM_VALUE < PROPERTY_CAPACITY);
const _: () = assert!(PROPERTY_CAPACITY <= ALIAS_OFFSET);
const _: () = {
    let mut i = 0;
    while i < ReservedSlot::ALL.len() {
        assert!(ReservedSlot::ALL[i] as usize == i);
        i += 1;
    }
};

/// Largest number of non-alias properties the enum space can hold
pub fn max_base_properties() -> usize {
    (PROPERTY_CAPACITY - FIRST_ENUM_VALUE - 1) as usize
}
