//! Password strength meter

/// Strength bucket derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrengthLevel {
    #[default]
    VeryWeak,
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }
}

/// Informational strength of a password; never gates submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordStrength {
    /// 0, 25, 50, 75 or 100
    pub score: u8,
    pub level: StrengthLevel,
}

impl PasswordStrength {
    /// 25 points each for length >= 8, a lowercase letter, an uppercase
    /// letter and a digit
    pub fn measure(password: &str) -> Self {
        let checks = [
            password.chars().count() >= 8,
            password.chars().any(|c| c.is_ascii_lowercase()),
            password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| c.is_ascii_digit()),
        ];
        let score = checks.iter().filter(|&&passed| passed).count() as u8 * 25;

        let level = match score {
            75..=u8::MAX => StrengthLevel::Strong,
            50..=74 => StrengthLevel::Medium,
            25..=49 => StrengthLevel::Weak,
            _ => StrengthLevel::VeryWeak,
        };

        Self { score, level }
    }
}
