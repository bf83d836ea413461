use std::collections::HashSet;

use super::*;

fn assert_unique<'a>(label: &str, values: impl IntoIterator<Item = &'a str>) {
    let mut seen = HashSet::new();
    for value in values {
        assert!(seen.insert(value), "duplicate {label}: {value}");
    }
}

#[test]
fn titles_are_unique_within_each_table() {
    assert_unique("project", PROJECTS.iter().map(|p| p.title));
    assert_unique("certificate", CERTIFICATES.iter().map(|c| c.title));
    assert_unique("achievement", ACHIEVEMENTS.iter().map(|a| a.title));
    assert_unique("skill category", SKILL_CATEGORIES.iter().map(|c| c.title));
}

#[test]
fn certificate_gallery_has_hidden_entries() {
    assert!(CERTIFICATES.len() > CERTIFICATES_INITIAL);
}

#[test]
fn external_links_are_absolute() {
    let links = PROJECTS
        .iter()
        .flat_map(|p| [p.repository, p.live])
        .chain(EDUCATION.iter().map(|e| e.website))
        .chain(PROFILE.social.iter().map(|s| s.href));
    for link in links {
        assert!(link.starts_with("https://"), "not absolute: {link}");
    }
}

#[test]
fn local_assets_are_root_relative() {
    assert!(PROFILE.resume_href.starts_with('/'));
    for cert in CERTIFICATES {
        assert!(cert.preview.starts_with('/'), "preview not root-relative: {}", cert.preview);
    }
}

#[test]
fn training_categories_keep_first_seen_order() {
    let training = &TRAINING[0];
    assert_eq!(
        training.categories(),
        ["Data Processing", "Visualization", "Machine Learning", "NLP"]
    );
    assert_eq!(training.tools_in("Visualization"), ["Matplotlib", "Seaborn", "WordCloud"]);
    assert!(training.tools_in("Cooking").is_empty());
}

#[test]
fn timeline_sides_alternate_from_left() {
    let sides: Vec<TimelineSide> = (0..4).map(TimelineSide::for_index).collect();
    assert_eq!(
        sides,
        [TimelineSide::Left, TimelineSide::Right, TimelineSide::Left, TimelineSide::Right]
    );
}
