//! 面接項目（トピック）と各項目の要件
//!
//! 項目の順序は固定で、面接はこの順に進む。

use serde::{Deserialize, Serialize};

/// 面接項目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewField {
    Name,
    CurrentRole,
    YearsOfExperience,
    TechnicalSkills,
    ProjectExperience,
    Motivation,
    PreferredWorkEnvironment,
}

/// 1 項目の要件（評価プロンプトと追加質問に使う）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRequirement {
    pub description: &'static str,
    pub expected: &'static str,
    /// 先頭が「次の項目へ進むとき」の最初の質問
    pub follow_up_questions: &'static [&'static str],
}

impl InterviewField {
    /// 面接の進行順
    pub const ALL: [InterviewField; 7] = [
        InterviewField::Name,
        InterviewField::CurrentRole,
        InterviewField::YearsOfExperience,
        InterviewField::TechnicalSkills,
        InterviewField::ProjectExperience,
        InterviewField::Motivation,
        InterviewField::PreferredWorkEnvironment,
    ];

    /// 保存・プロンプト用のキー（snake_case）
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CurrentRole => "current_role",
            Self::YearsOfExperience => "years_of_experience",
            Self::TechnicalSkills => "technical_skills",
            Self::ProjectExperience => "project_experience",
            Self::Motivation => "motivation",
            Self::PreferredWorkEnvironment => "preferred_work_environment",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// 文中に埋め込む表記（"current role"）
    pub fn label(&self) -> String {
        self.key().replace('_', " ")
    }

    /// 見出し用の表記（"Current Role"）
    pub fn title(&self) -> String {
        self.key()
            .split('_')
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    Some(c) => c.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// 次の項目（最後の項目なら None）
    pub fn next(&self) -> Option<Self> {
        let idx = Self::ALL.iter().position(|f| f == self)?;
        Self::ALL.get(idx + 1).copied()
    }

    pub fn first_follow_up(&self) -> &'static str {
        self.requirement().follow_up_questions[0]
    }

    pub fn requirement(&self) -> &'static FieldRequirement {
        match self {
            Self::Name => &NAME,
            Self::CurrentRole => &CURRENT_ROLE,
            Self::YearsOfExperience => &YEARS_OF_EXPERIENCE,
            Self::TechnicalSkills => &TECHNICAL_SKILLS,
            Self::ProjectExperience => &PROJECT_EXPERIENCE,
            Self::Motivation => &MOTIVATION,
            Self::PreferredWorkEnvironment => &PREFERRED_WORK_ENVIRONMENT,
        }
    }
}

impl std::fmt::Display for InterviewField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

static NAME: FieldRequirement = FieldRequirement {
    description: "Full name of the candidate",
    expected: "First and last name",
    follow_up_questions: &[
        "Could you spell your full name for me?",
        "Do you go by any other names professionally?",
    ],
};

static CURRENT_ROLE: FieldRequirement = FieldRequirement {
    description: "Current job position and main responsibilities",
    expected: "Job title, company, key responsibilities, team size, main achievements",
    follow_up_questions: &[
        "What are your main responsibilities in this role?",
        "How large is the team you work with?",
        "What have been your key achievements in this position?",
    ],
};

static YEARS_OF_EXPERIENCE: FieldRequirement = FieldRequirement {
    description: "Total relevant work experience",
    expected: "Years of total experience, years in current field, career progression",
    follow_up_questions: &[
        "How long have you been working in this field specifically?",
        "Could you briefly outline your career progression?",
        "What different roles have you held during your career?",
    ],
};

static TECHNICAL_SKILLS: FieldRequirement = FieldRequirement {
    description: "Technical abilities and proficiency levels",
    expected: "List of skills with proficiency levels (beginner/intermediate/expert), recent usage",
    follow_up_questions: &[
        "Could you rate your proficiency in each skill mentioned?",
        "How recently have you used these skills?",
        "What projects have you completed using these skills?",
    ],
};

static PROJECT_EXPERIENCE: FieldRequirement = FieldRequirement {
    description: "Significant projects and achievements",
    expected: "Project descriptions, role, technologies used, outcomes, challenges overcome",
    follow_up_questions: &[
        "What was your specific role in these projects?",
        "What challenges did you face and how did you overcome them?",
        "What were the measurable outcomes of these projects?",
    ],
};

static MOTIVATION: FieldRequirement = FieldRequirement {
    description: "Career goals and motivation for the position",
    expected: "Short-term and long-term goals, interest in the position, alignment with career path",
    follow_up_questions: &[
        "What interests you most about this position?",
        "Where do you see yourself in 5 years?",
        "How does this role align with your career goals?",
    ],
};

static PREFERRED_WORK_ENVIRONMENT: FieldRequirement = FieldRequirement {
    description: "Work style and preferred environment",
    expected: "Preferred work style, team dynamics, company culture, work-life balance",
    follow_up_questions: &[
        "What type of company culture do you thrive in?",
        "How do you prefer to collaborate with team members?",
        "What management style works best for you?",
    ],
};
