use giapha_core::{counts_by_generation, life_status_summary, Member};

fn member(id: i64, generation: Option<i32>, dod_lunar: Option<&str>) -> Member {
    let mut member = Member::new(id, format!("Member {id}"), None);
    member.generation = generation;
    member.dod_lunar = dod_lunar.map(str::to_string);
    member
}

#[test]
fn counts_by_generation_orders_ascending_and_buckets_unassigned() {
    let members = vec![
        member(1, Some(3), None),
        member(2, Some(1), None),
        member(3, Some(3), None),
        member(4, None, None),
        member(5, Some(2), None),
    ];

    let counts = counts_by_generation(&members);

    let keys: Vec<i32> = counts.by_generation.keys().copied().collect();
    assert_eq!(keys, vec![1, 2, 3]);
    assert_eq!(counts.by_generation[&3], 2);
    assert_eq!(counts.unassigned, 1);
    assert_eq!(counts.total(), members.len());
}

#[test]
fn living_plus_deceased_equals_total() {
    let members = vec![
        member(1, Some(1), Some("1985")),
        member(2, Some(2), None),
        member(3, Some(2), Some("12/1999 âm lịch")),
        member(4, Some(3), None),
    ];

    let summary = life_status_summary(&members);
    assert_eq!(summary.deceased, 2);
    assert_eq!(summary.living, 2);
    assert_eq!(summary.total(), members.len());
}

#[test]
fn blank_dod_counts_as_living() {
    let members = vec![member(1, None, Some("   ")), member(2, None, Some(""))];

    let summary = life_status_summary(&members);
    assert_eq!(summary.living, 2);
    assert_eq!(summary.deceased, 0);
}

#[test]
fn aggregation_is_independent_of_input_order() {
    let mut members = vec![
        member(1, Some(1), Some("1985")),
        member(2, Some(2), None),
        member(3, None, None),
        member(4, Some(2), Some("2001")),
    ];

    let counts_forward = counts_by_generation(&members);
    let summary_forward = life_status_summary(&members);

    members.reverse();
    assert_eq!(counts_by_generation(&members), counts_forward);
    assert_eq!(life_status_summary(&members), summary_forward);
}
