pub mod cv;

pub use cv::{
    CertificationEntry, CvData, EducationEntry, ExperienceEntry, LanguageEntry, PersonalInfo,
    ProjectEntry, SkillEntry,
};
