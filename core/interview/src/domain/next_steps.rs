//! レポートのあとに示す次の一手（資金調達・転職先）
//!
//! どちらもモデルを使わず、superpower と soft_heart の回答から組み立てる。

use crate::domain::answers::InterviewAnswers;
use crate::domain::question::QuestionId;

/// soft_heart が未回答のときの投資家の専門分野
const VERTICAL_PLACEHOLDER: &str = "your specific vertical";

/// soft_heart が未回答のときの業界名
const INDUSTRY_PLACEHOLDER: &str = "Industry";

/// 転職先の職種
pub const PIVOT_ROLES: [&str; 3] = ["Product Lead", "Strategic Partnerships", "Head of Operations"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundingOption {
    pub name: &'static str,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextSteps {
    pub superpower: String,
    pub soft_heart: String,
    pub funding: Vec<FundingOption>,
    pub roles: Vec<String>,
}

fn answer(answers: &InterviewAnswers, id: QuestionId) -> Option<&str> {
    answers.get(id).map(str::trim).filter(|s| !s.is_empty())
}

/// 回答に合う資金の種類
pub fn funding_options(answers: &InterviewAnswers) -> Vec<FundingOption> {
    let superpower = answer(answers, QuestionId::Superpower).unwrap_or("");
    let vertical = answer(answers, QuestionId::SoftHeart).unwrap_or(VERTICAL_PLACEHOLDER);
    vec![
        FundingOption {
            name: "Innovate UK / NSF Grants",
            description: format!(
                "Best if your \"{}\" involves R&D or technical innovation. Non-dilutive funding.",
                superpower
            ),
        },
        FundingOption {
            name: "Niche VC / Micro-Funds",
            description: format!("Seek investors who specialize in {}.", vertical),
        },
    ]
}

/// superpower と soft_heart を組み合わせた職種
pub fn career_pivot_roles(answers: &InterviewAnswers) -> Vec<String> {
    let industry = answer(answers, QuestionId::SoftHeart).unwrap_or(INDUSTRY_PLACEHOLDER);
    PIVOT_ROLES
        .iter()
        .map(|role| format!("{} at {} Tech", role, industry))
        .collect()
}

impl NextSteps {
    pub fn from_answers(answers: &InterviewAnswers) -> Self {
        Self {
            superpower: answer(answers, QuestionId::Superpower).unwrap_or("").to_string(),
            soft_heart: answer(answers, QuestionId::SoftHeart).unwrap_or("").to_string(),
            funding: funding_options(answers),
            roles: career_pivot_roles(answers),
        }
    }
}
