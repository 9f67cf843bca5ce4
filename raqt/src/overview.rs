//! Static text shown around the question battery.

use crate::GOAL_COUNT;

/// Page title.
pub const TITLE: &str = "Risk Analysis Quality Test";

/// Introduction to quality control of IceRisk analyses.
pub const INTRODUCTION: &str = "\
Methods for performing quality control on IceRisk analyses.

For IceRisk analysis the resources below were presented by Rolv Erlend Bredesen \
at the Winterwind conferences 2018 and 2019.

A drone campaign (winter 2021) for the WEIC project suggests ice pieces within \
H+D (wind turbine hub height + rotor diameter) for 4 m/s winds are sufficient. \
However up to 10 m/s wind speeds were observed after icing episode before drone \
pictures were taken.

The Society for Risk Analysis (SRA) guidelines describe how to judge the quality \
of a risk analysis. The questions from the quality test are repeated in the survey below.";

/// A titled external reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    pub title: &'static str,
    pub url: &'static str,
}

pub const REFERENCES: [Reference; 4] = [
    Reference {
        title: "Norwegian guidelines including uncertainty estimates using strength of knowledge indices and NUSAP elements",
        url: "https://windren.se/WW2018/03_2_24_Bredesen_Norwegian_guidelines_regarding_the_risk_of_icethrow_for_the_public_Pub_v2_draft.pdf",
    },
    Reference {
        title: "A cross-comparison of the IceThrower database with 10 years of SCADA",
        url: "https://windren.se/WW2019/05_01_Bredesen_A_cross-comparison_of_the_IceThrower_database_with_10_years_of_SCADA_and_meteorological_forecast_data_-_What_can_we_learn_pub_v2.pdf",
    },
    Reference {
        title: "SRA Risk Analysis Quality Test R10",
        url: "https://www.sra.org/resources/",
    },
    Reference {
        title: "Risk explained by the experts (video)",
        url: "https://youtu.be/CbnIlLXeHw0",
    },
];

/// Goals of the quality test battery, shown as a checklist.
pub const GOALS: [&str; GOAL_COUNT] = [
    "Define and measure the quality of risk analyses supporting risk management decisions.",
    "Full disclosure of budgets, schedules, competing interests, and other decision factors",
    "Consider every discovered shortfall as an \"Opportunity To Improve\"",
    "Awareness on shortfalls, and the implications of those shortfalls for the decision making",
];

/// How to fill in the survey.
pub const INSTRUCTIONS: [&str; 5] = [
    "Select which groups to answer in the sidebar.",
    "Hit the submit button after completing a group of questions to update the state. The submitted state of each answered question is shown in the sidebar.",
    "NA means not applicable, that means it should be accompanied by a justification if not obvious.",
    "Note that for the NA choice a text field to elaborate will show after the submit button has been pressed.",
    "Tick the download checkbox at the bottom to extract your choices.",
];
