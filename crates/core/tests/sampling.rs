use tagdraw_core::{pick_weighted, Item, RngState};

#[test]
fn weights_one_and_three_split_a_quarter_and_three_quarters() {
    let items = [
        Item::new("light", ["T"], Vec::<String>::new()).with_count(1),
        Item::new("heavy", ["T"], Vec::<String>::new()).with_count(3),
    ];
    let refs: Vec<&Item> = items.iter().collect();
    let mut rng = RngState::from_seed(0xC0FFEE);
    let draws = 20_000;
    let heavy = (0..draws)
        .filter(|_| pick_weighted(&refs, &mut rng).expect("pick").name == "heavy")
        .count();
    let share = heavy as f64 / draws as f64;
    assert!((0.72..0.78).contains(&share), "share was {share}");
}

#[test]
fn missing_count_weighs_like_one() {
    let items = [
        Item::new("implicit", ["T"], Vec::<String>::new()),
        Item::new("explicit", ["T"], Vec::<String>::new()).with_count(1),
    ];
    let refs: Vec<&Item> = items.iter().collect();
    let mut rng = RngState::from_seed(42);
    let draws = 10_000;
    let implicit = (0..draws)
        .filter(|_| pick_weighted(&refs, &mut rng).expect("pick").name == "implicit")
        .count();
    let share = implicit as f64 / draws as f64;
    assert!((0.46..0.54).contains(&share), "share was {share}");
}

#[test]
fn same_seed_replays_same_draws() {
    let items: Vec<Item> = (1..=6)
        .map(|i| Item::new(format!("c{i}"), ["T"], Vec::<String>::new()).with_count(i))
        .collect();
    let refs: Vec<&Item> = items.iter().collect();
    let run = |seed| {
        let mut rng = RngState::from_seed(seed);
        (0..32)
            .map(|_| pick_weighted(&refs, &mut rng).expect("pick").name.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(run(7), run(7));
}
