//! Skill grouping — partitions the flat skill list into category buckets.
//!
//! Key order equals the order in which each category first appears in the
//! input; names keep their relative input order within a category. Every
//! encoder that renders a skills section shares this grouping.

use crate::models::SkillEntry;

/// Groups skills by category, first-occurrence ordered.
pub fn group_skills_by_category(skills: &[SkillEntry]) -> Vec<(String, Vec<String>)> {
    let mut grouped: Vec<(String, Vec<String>)> = Vec::new();
    for skill in skills {
        match grouped.iter_mut().find(|(cat, _)| *cat == skill.category) {
            Some((_, names)) => names.push(skill.name.clone()),
            None => grouped.push((skill.category.clone(), vec![skill.name.clone()])),
        }
    }
    grouped
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, category: &str) -> SkillEntry {
        SkillEntry {
            name: name.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_empty_input_empty_output() {
        assert!(group_skills_by_category(&[]).is_empty());
    }

    #[test]
    fn test_first_occurrence_key_order() {
        let skills = [skill("A", "cat1"), skill("B", "cat2"), skill("C", "cat1")];
        let grouped = group_skills_by_category(&skills);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0, "cat1");
        assert_eq!(grouped[0].1, vec!["A", "C"]);
        assert_eq!(grouped[1].0, "cat2");
        assert_eq!(grouped[1].1, vec!["B"]);
    }

    #[test]
    fn test_names_preserve_input_order() {
        let skills = [
            skill("Java", "Languages"),
            skill("Terraform", "Infrastructure"),
            skill("Python", "Languages"),
            skill("Rust", "Languages"),
        ];
        let grouped = group_skills_by_category(&skills);
        assert_eq!(grouped[0].1, vec!["Java", "Python", "Rust"]);
    }

    #[test]
    fn test_free_form_categories_not_normalized() {
        // Categories differing only in case are distinct buckets.
        let skills = [skill("A", "cloud"), skill("B", "Cloud")];
        let grouped = group_skills_by_category(&skills);
        assert_eq!(grouped.len(), 2);
    }
}
