use giapha_core::{filter_members, Member, MemberFilter};

fn member(id: i64, name: &str, generation: Option<i32>) -> Member {
    let mut member = Member::new(id, name, None);
    member.generation = generation;
    member
}

fn scenario_members() -> Vec<Member> {
    vec![
        member(1, "Lê Tổ", Some(1)),
        member(2, "Lê Văn An", Some(2)),
        member(3, "Lê Văn Bình", Some(2)),
    ]
}

#[test]
fn empty_filter_is_full_passthrough_in_order() {
    let members = scenario_members();
    let filtered = filter_members(&members, &MemberFilter::default());

    assert_eq!(filtered.len(), members.len());
    for (original, kept) in members.iter().zip(filtered) {
        assert_eq!(original, kept);
    }
}

#[test]
fn query_an_matches_only_le_van_an() {
    let members = scenario_members();
    let filtered = filter_members(&members, &MemberFilter::new("an"));

    // "ăn" in "Văn" and "ình" in "Bình" carry diacritics, so the plain
    // substring "an" only appears in the given name "An".
    let ids: Vec<i64> = filtered.iter().map(|member| member.id).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn matching_is_case_insensitive() {
    let members = scenario_members();
    let upper = filter_members(&members, &MemberFilter::new("AN"));
    let lower = filter_members(&members, &MemberFilter::new("an"));

    assert_eq!(upper, lower);
    assert_eq!(upper.len(), 1);
    assert_eq!(upper[0].id, 2);
}

#[test]
fn diacritic_query_matches_diacritic_name() {
    let members = scenario_members();
    let filtered = filter_members(&members, &MemberFilter::new("văn"));

    let ids: Vec<i64> = filtered.iter().map(|member| member.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn generation_set_restricts_results() {
    let members = scenario_members();
    let filter = MemberFilter::default().with_generations([2]);
    let filtered = filter_members(&members, &filter);

    let ids: Vec<i64> = filtered.iter().map(|member| member.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn generation_set_and_query_are_conjunctive() {
    let members = scenario_members();
    let filter = MemberFilter::new("an").with_generations([2]);
    let filtered = filter_members(&members, &filter);

    let ids: Vec<i64> = filtered.iter().map(|member| member.id).collect();
    assert_eq!(ids, vec![2]);

    let disjoint = MemberFilter::new("an").with_generations([1]);
    assert!(filter_members(&members, &disjoint).is_empty());
}

#[test]
fn members_without_generation_are_excluded_by_generation_set() {
    let members = vec![member(1, "Lê Tổ", Some(1)), member(2, "Vô Danh", None)];

    let filter = MemberFilter::default().with_generations([1]);
    let ids: Vec<i64> = filter_members(&members, &filter)
        .iter()
        .map(|member| member.id)
        .collect();
    assert_eq!(ids, vec![1]);

    // With no generation restriction the member comes back.
    let all = filter_members(&members, &MemberFilter::default());
    assert_eq!(all.len(), 2);
}

#[test]
fn relative_input_order_is_preserved() {
    let members = vec![
        member(5, "Lê Văn An", Some(3)),
        member(1, "Lê Thị Lan", Some(3)),
        member(9, "Lê Văn Anh", Some(3)),
    ];

    let filtered = filter_members(&members, &MemberFilter::new("an"));
    let ids: Vec<i64> = filtered.iter().map(|member| member.id).collect();
    assert_eq!(ids, vec![5, 1, 9]);
}
