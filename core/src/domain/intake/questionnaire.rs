//! Fixed copy and option lists of the intake questionnaire.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::intake::entities::WizardStep;

pub const SKIN_GOALS: [&str; 15] = [
    "Reduce blemishes",
    "Minimise blackheads",
    "Minimise pores visibility",
    "Target post blemish marks",
    "Lighten pigmentation",
    "Reduce redness",
    "Reduce wrinkles",
    "Smooth fine lines",
    "Improve elasticity",
    "Enhance radiance",
    "Hydrate dry skin",
    "Smooth texture",
    "Reduce eye wrinkles",
    "Brighten dark circles",
    "Reduce under eye bags",
];

pub const SKIN_TYPES: [&str; 4] = [
    "My skin feels and looks oily all over, by midday my face appears shiny",
    "I have an oily T-zone (forehead, nose & chin) and normal/dry cheeks",
    "My skin tends to feel dry/ rough and feels tight after cleansing",
    "My skin doesn't feel noticeably oily or dry",
];

pub const REACTION_FREQUENCIES: [&str; 5] =
    ["Almost always", "Often", "Sometimes", "Rarely", "Never"];

pub const SKIN_TONES: [&str; 6] = ["Very fair", "Fair", "Medium", "Olive", "Brown", "Black"];

pub const SKIN_SYMPTOMS: [&str; 6] = [
    "Dehydration (dry / dull / lacklustre skin)",
    "Sudden onset of redness / skin flushing",
    "Sudden onset of blemishes",
    "Flaky / scaly patches",
    "Burning / stinging / warm feeling",
    "None",
];

pub const SKIN_CONDITIONS: [&str; 8] = [
    "Need pregnancy/nursing safe routine",
    "History of eczema",
    "History of psoriasis",
    "History of rosacea",
    "History of acne",
    "Currently using a facial skin prescription",
    "Currently using non-prescription retinoid",
    "None",
];

pub const BIRTH_DAY_RANGE: (u8, u8) = (1, 31);
pub const BIRTH_YEAR_RANGE: (u16, u16) = (1900, 2024);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SelectionKind {
    None,
    Single,
    Multiple,
    Date,
    Images,
}

/// Text and controls shown for one wizard step.
#[derive(Debug, Clone, Copy)]
pub struct StepCopy {
    pub header: &'static str,
    pub description: &'static str,
    pub selection: SelectionKind,
    pub options: &'static [&'static str],
}

pub fn step_copy(step: WizardStep) -> StepCopy {
    match step {
        WizardStep::Welcome => StepCopy {
            header: "Get the best SFIE Beauty routine via our AI powered Skin Analysis",
            description: "Take the skin quiz\n\
                Tell us your skin goals and budget (takes 2 minutes)\n\n\
                Upload your photos\n\
                Add 3 photos for your skin analysis\n\n\
                View your new routine\n\
                Receive a routine in 2 minutes based on your needs and preferences",
            selection: SelectionKind::None,
            options: &[],
        },
        WizardStep::SkinGoals => StepCopy {
            header: "What’s your number one skin goal?",
            description: "Select the goal that matters to you most. You can select more later.",
            selection: SelectionKind::Multiple,
            options: &SKIN_GOALS,
        },
        WizardStep::SkinType => StepCopy {
            header: "How would you best describe your skin?",
            description: "Ideally, this should be assessed in the morning after you wash your face.",
            selection: SelectionKind::Single,
            options: &SKIN_TYPES,
        },
        WizardStep::ReactionFrequency => StepCopy {
            header: "How often does your skin typically react to new products?",
            description: "Consider if you have experienced a reaction (sensitivity, redness, breakout) after using a new product.",
            selection: SelectionKind::Single,
            options: &REACTION_FREQUENCIES,
        },
        WizardStep::SkinTone => StepCopy {
            header: "How would you describe your skin tone?",
            description: "The level of melanin in your skin affects different biological processes (like your response to inflammation).",
            selection: SelectionKind::Single,
            options: &SKIN_TONES,
        },
        WizardStep::SkinSymptoms => StepCopy {
            header: "Has your skin had any of these symptoms recently?",
            description: "Let us know if you’ve experienced any of these in the last 3-6 months.",
            selection: SelectionKind::Multiple,
            options: &SKIN_SYMPTOMS,
        },
        WizardStep::SkinConditions => StepCopy {
            header: "Do any of the following apply?",
            description: "Select all that may impact your skin.",
            selection: SelectionKind::Multiple,
            options: &SKIN_CONDITIONS,
        },
        WizardStep::Birthdate => StepCopy {
            header: "When is your birthday?",
            description: "As we age, our skin changes. Your skincare routine should take your age into account.",
            selection: SelectionKind::Date,
            options: &[],
        },
        WizardStep::Screening => StepCopy {
            header: "Face Condition Analyzer",
            description: "Kindly upload a photo of your face.",
            selection: SelectionKind::Images,
            options: &[],
        },
        WizardStep::Submission => StepCopy {
            header: "Processing your results...",
            description: "Provide your API key to receive your personalized skincare recommendations.",
            selection: SelectionKind::None,
            options: &[],
        },
    }
}
