//! Onboarding Wizard State
//!
//! Step ordering and the advance gates for the first-run wizard. The page
//! component owns the signals; this module owns the rules.

use crate::models::ModuleCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardStep {
    Company,
    Modules,
    Team,
    Review,
}

impl WizardStep {
    pub const ORDER: &'static [WizardStep] = &[
        WizardStep::Company,
        WizardStep::Modules,
        WizardStep::Team,
        WizardStep::Review,
    ];

    pub fn next(&self) -> Option<WizardStep> {
        let idx = Self::ORDER.iter().position(|s| s == self)?;
        Self::ORDER.get(idx + 1).copied()
    }

    pub fn prev(&self) -> Option<WizardStep> {
        let idx = Self::ORDER.iter().position(|s| s == self)?;
        idx.checked_sub(1).and_then(|i| Self::ORDER.get(i)).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Company => "Company",
            WizardStep::Modules => "Modules",
            WizardStep::Team => "Team",
            WizardStep::Review => "Review",
        }
    }
}

/// Wizard draft, posted to `/onboarding/complete` at the end
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct OnboardingDraft {
    pub company_name: String,
    pub industry: String,
    pub modules: Vec<ModuleCode>,
    /// Invite emails; the Team step is skippable so this may stay empty
    pub invites: Vec<String>,
}

/// Gate for the Next button.
///
/// Company requires a non-blank name and industry; Modules requires at least
/// one selection; Team and Review never block.
pub fn can_advance(step: WizardStep, draft: &OnboardingDraft) -> bool {
    match step {
        WizardStep::Company => {
            !draft.company_name.trim().is_empty() && !draft.industry.trim().is_empty()
        }
        WizardStep::Modules => !draft.modules.is_empty(),
        WizardStep::Team | WizardStep::Review => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, industry: &str, modules: &[ModuleCode]) -> OnboardingDraft {
        OnboardingDraft {
            company_name: name.to_string(),
            industry: industry.to_string(),
            modules: modules.to_vec(),
            invites: Vec::new(),
        }
    }

    #[test]
    fn test_company_step_requires_name_and_industry() {
        assert!(!can_advance(WizardStep::Company, &draft("", "Retail", &[])));
        assert!(!can_advance(WizardStep::Company, &draft("Acme", "", &[])));
        assert!(!can_advance(WizardStep::Company, &draft("   ", "Retail", &[])));
        assert!(can_advance(WizardStep::Company, &draft("Acme", "Retail", &[])));
    }

    #[test]
    fn test_modules_step_requires_selection() {
        assert!(!can_advance(WizardStep::Modules, &draft("Acme", "Retail", &[])));
        assert!(can_advance(
            WizardStep::Modules,
            &draft("Acme", "Retail", &[ModuleCode::Tasks])
        ));
    }

    #[test]
    fn test_team_step_is_skippable() {
        assert!(can_advance(WizardStep::Team, &draft("Acme", "Retail", &[])));
    }

    #[test]
    fn test_step_order() {
        assert_eq!(WizardStep::Company.next(), Some(WizardStep::Modules));
        assert_eq!(WizardStep::Review.next(), None);
        assert_eq!(WizardStep::Company.prev(), None);
        assert_eq!(WizardStep::Modules.prev(), Some(WizardStep::Company));
    }
}
