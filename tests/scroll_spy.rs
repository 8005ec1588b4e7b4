use portalist::ui::components::about_component::{active_section_index, AboutComponent, SECTIONS};

#[test]
fn test_active_section_resolution() {
    // Two sections with adjacent bounds; an effective offset of 150
    // lands inside the second one
    let bounds = [(0usize, 100usize), (100, 250)];
    assert_eq!(active_section_index(&bounds, 150), Some(1));
    assert_eq!(active_section_index(&bounds, 0), Some(0));
    assert_eq!(active_section_index(&bounds, 99), Some(0));
    assert_eq!(active_section_index(&bounds, 100), Some(1));
}

#[test]
fn test_first_matching_section_wins() {
    // Overlapping bounds: iteration order decides, first match wins
    let bounds = [(0usize, 200usize), (100, 250)];
    assert_eq!(active_section_index(&bounds, 150), Some(0));
}

#[test]
fn test_position_outside_all_bounds() {
    let bounds = [(0usize, 100usize), (100, 250)];
    assert_eq!(active_section_index(&bounds, 250), None);
    assert_eq!(active_section_index(&[], 0), None);
}

#[test]
fn test_sections_are_declared_in_order() {
    let ids: Vec<&str> = SECTIONS.iter().map(|section| section.id).collect();
    assert_eq!(ids, vec!["overview", "pc-usage", "equipment", "practicum", "contact"]);
}

#[test]
fn test_initial_active_section_is_overview() {
    let about = AboutComponent::new();
    assert_eq!(about.active_section(), "overview");
}

#[test]
fn test_jump_to_section_activates_it() {
    let mut about = AboutComponent::new();

    for (index, section) in SECTIONS.iter().enumerate() {
        about.scroll_to_section(index);
        assert_eq!(about.active_section(), section.id);
    }

    // Jumping out of range leaves the viewport where it was
    about.scroll_to_section(2);
    about.scroll_to_section(99);
    assert_eq!(about.active_section(), SECTIONS[2].id);
}
