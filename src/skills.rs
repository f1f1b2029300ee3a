//! Skill grouping for the skills section.

use crate::catalog::{Skill, SkillCategory};

/// Skills of one category, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillGroup<'a> {
    pub category: SkillCategory,
    pub skills: Vec<&'a Skill>,
}

impl SkillGroup<'_> {
    /// Mean proficiency of the group, rounded down. Zero for an empty group.
    pub fn average_level(&self) -> u8 {
        if self.skills.is_empty() {
            return 0;
        }
        let total: u32 = self.skills.iter().map(|s| u32::from(s.level)).sum();
        (total / self.skills.len() as u32) as u8
    }
}

/// Partition `skills` by category.
///
/// Groups come out in [`SkillCategory::ALL`] order and categories with no
/// skills are left out. Every skill lands in exactly one group.
pub fn group_by_category(skills: &[Skill]) -> Vec<SkillGroup<'_>> {
    SkillCategory::ALL
        .into_iter()
        .map(|category| SkillGroup {
            category,
            skills: skills.iter().filter(|s| s.category == category).collect(),
        })
        .filter(|g| !g.skills.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SKILLS;

    #[test]
    fn every_skill_lands_in_exactly_one_matching_group() {
        let groups = group_by_category(&SKILLS);
        let total: usize = groups.iter().map(|g| g.skills.len()).sum();
        assert_eq!(total, SKILLS.len());

        for skill in SKILLS.iter() {
            let hits: Vec<_> = groups
                .iter()
                .filter(|g| g.skills.iter().any(|s| std::ptr::eq(*s, skill)))
                .collect();
            assert_eq!(hits.len(), 1, "{} grouped {} times", skill.name, hits.len());
            assert_eq!(hits[0].category, skill.category);
        }
    }

    #[test]
    fn groups_follow_category_order_and_keep_catalog_order() {
        let groups = group_by_category(&SKILLS);
        let order: Vec<_> = groups.iter().map(|g| g.category).collect();
        assert_eq!(order, SkillCategory::ALL.to_vec());

        let backend: Vec<_> = groups[1].skills.iter().map(|s| s.name).collect();
        assert_eq!(backend, ["Node.js", "Express.js", "PHP", "Python"]);
    }

    #[test]
    fn empty_categories_are_omitted() {
        let only_mobile = [Skill {
            name: "Flutter",
            level: 40,
            category: SkillCategory::Mobile,
            icon: None,
            years: None,
        }];
        let groups = group_by_category(&only_mobile);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category, SkillCategory::Mobile);
        assert!(group_by_category(&[]).is_empty());
    }

    #[test]
    fn average_level_rounds_down() {
        let groups = group_by_category(&SKILLS);
        // Database: 70, 60, 65
        assert_eq!(groups[2].average_level(), 65);
        // Design: 70, 80
        assert_eq!(groups[4].average_level(), 75);
    }
}
