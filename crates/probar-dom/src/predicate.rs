//! Canonical predicates and their alias names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical assertion kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredicateKind {
    /// `exists`
    Exists,
    /// `doesNotExist`
    DoesNotExist,
    /// `isChecked`
    IsChecked,
    /// `isNotChecked`
    IsNotChecked,
    /// `isFocused`
    IsFocused,
    /// `isNotFocused`
    IsNotFocused,
    /// `isRequired`
    IsRequired,
    /// `isNotRequired`
    IsNotRequired,
    /// `isDisabled`
    IsDisabled,
    /// `isNotDisabled`
    IsNotDisabled,
    /// `isVisible`
    IsVisible,
    /// `isNotVisible`
    IsNotVisible,
    /// `hasAttribute`
    HasAttribute,
    /// `doesNotHaveAttribute`
    DoesNotHaveAttribute,
    /// `hasClass`
    HasClass,
    /// `doesNotHaveClass`
    DoesNotHaveClass,
    /// `hasText`
    HasText,
    /// `hasAnyText`
    HasAnyText,
    /// `includesText`
    IncludesText,
    /// `doesNotIncludeText`
    DoesNotIncludeText,
    /// `hasValue`
    HasValue,
    /// `hasAnyValue`
    HasAnyValue,
    /// `hasNoValue`
    HasNoValue,
    /// `hasStyle`
    HasStyle,
}

impl PredicateKind {
    /// Every canonical kind
    pub const ALL: &'static [Self] = &[
        Self::Exists,
        Self::DoesNotExist,
        Self::IsChecked,
        Self::IsNotChecked,
        Self::IsFocused,
        Self::IsNotFocused,
        Self::IsRequired,
        Self::IsNotRequired,
        Self::IsDisabled,
        Self::IsNotDisabled,
        Self::IsVisible,
        Self::IsNotVisible,
        Self::HasAttribute,
        Self::DoesNotHaveAttribute,
        Self::HasClass,
        Self::DoesNotHaveClass,
        Self::HasText,
        Self::HasAnyText,
        Self::IncludesText,
        Self::DoesNotIncludeText,
        Self::HasValue,
        Self::HasAnyValue,
        Self::HasNoValue,
        Self::HasStyle,
    ];

    /// Canonical camelCase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exists => "exists",
            Self::DoesNotExist => "doesNotExist",
            Self::IsChecked => "isChecked",
            Self::IsNotChecked => "isNotChecked",
            Self::IsFocused => "isFocused",
            Self::IsNotFocused => "isNotFocused",
            Self::IsRequired => "isRequired",
            Self::IsNotRequired => "isNotRequired",
            Self::IsDisabled => "isDisabled",
            Self::IsNotDisabled => "isNotDisabled",
            Self::IsVisible => "isVisible",
            Self::IsNotVisible => "isNotVisible",
            Self::HasAttribute => "hasAttribute",
            Self::DoesNotHaveAttribute => "doesNotHaveAttribute",
            Self::HasClass => "hasClass",
            Self::DoesNotHaveClass => "doesNotHaveClass",
            Self::HasText => "hasText",
            Self::HasAnyText => "hasAnyText",
            Self::IncludesText => "includesText",
            Self::DoesNotIncludeText => "doesNotIncludeText",
            Self::HasValue => "hasValue",
            Self::HasAnyValue => "hasAnyValue",
            Self::HasNoValue => "hasNoValue",
            Self::HasStyle => "hasStyle",
        }
    }

    /// Look up a canonical name or alias
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .or_else(|| {
                ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == name)
                    .map(|(_, kind)| *kind)
            })
    }

    /// Whether an absent target is acceptable (it counts as zero matches)
    #[must_use]
    pub const fn accepts_absent(self) -> bool {
        matches!(self, Self::Exists | Self::DoesNotExist | Self::IsNotVisible)
    }

    /// Alias names that resolve to this kind
    pub fn aliases(self) -> impl Iterator<Item = &'static str> {
        ALIASES
            .iter()
            .filter(move |(_, kind)| *kind == self)
            .map(|(alias, _)| *alias)
    }
}

impl fmt::Display for PredicateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Alternative names accepted by the dynamic API
pub const ALIASES: &[(&str, PredicateKind)] = &[
    ("hasNoAttribute", PredicateKind::DoesNotHaveAttribute),
    ("lacksAttribute", PredicateKind::DoesNotHaveAttribute),
    ("hasNoClass", PredicateKind::DoesNotHaveClass),
    ("lacksClass", PredicateKind::DoesNotHaveClass),
    ("matchesText", PredicateKind::HasText),
    ("containsText", PredicateKind::IncludesText),
    ("hasTextContaining", PredicateKind::IncludesText),
    ("doesNotContainText", PredicateKind::DoesNotIncludeText),
    ("doesNotHaveTextContaining", PredicateKind::DoesNotIncludeText),
    ("lacksValue", PredicateKind::HasNoValue),
];
