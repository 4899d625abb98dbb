// Property tests for deck navigation invariants

use proptest::prelude::*;

use decktty::content::loader::parse_deck;
use decktty::content::model::DeckFile;
use decktty::deck::config::DeckConfig;
use decktty::deck::engine::Deck;
use decktty::settings::MemorySettings;

/// One navigation operation applied to the deck under test
#[derive(Debug, Clone)]
enum NavOp {
    Next,
    Prev,
    GoTo(usize),
    Back,
    Forward,
}

fn nav_op_strategy(slide_count: usize) -> impl Strategy<Value = NavOp> {
    prop_oneof![
        Just(NavOp::Next),
        Just(NavOp::Prev),
        (0..slide_count).prop_map(NavOp::GoTo),
        Just(NavOp::Back),
        Just(NavOp::Forward),
    ]
}

/// Strategy producing a deck source and an op sequence sized to it
fn walk_strategy() -> impl Strategy<Value = (DeckFile, Vec<NavOp>)> {
    (2usize..10, 0usize..3).prop_flat_map(|(slide_count, steps_per_slide)| {
        let source: String = (0..slide_count)
            .map(|i| {
                let mut slide = format!("@slide s{i}\nSlide {i}\n");
                if steps_per_slide > 0 {
                    slide.push_str("@build\n");
                    for s in 0..steps_per_slide {
                        slide.push_str(&format!("- step {s}\n"));
                    }
                    slide.push_str("@end\n");
                }
                slide
            })
            .collect::<Vec<_>>()
            .join("---\n");
        let file = parse_deck(&source).expect("generated deck parses");
        (
            Just(file),
            prop::collection::vec(nav_op_strategy(slide_count), 0..40),
        )
    })
}

fn apply(deck: &mut Deck, op: &NavOp) {
    match op {
        NavOp::Next => deck.next(),
        NavOp::Prev => deck.prev(),
        NavOp::GoTo(index) => {
            let id = deck.slides()[*index].id().to_string();
            deck.go_to(&id, true);
        }
        NavOp::Back => deck.history_back(),
        NavOp::Forward => deck.history_forward(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_exactly_one_current_after_any_walk((file, ops) in walk_strategy()) {
        let mut deck = Deck::new(file, DeckConfig::default(), Box::new(MemorySettings::new()))
            .expect("deck builds");
        deck.start();

        for op in &ops {
            apply(&mut deck, op);
            let current: Vec<usize> = deck
                .slides()
                .iter()
                .filter(|slide| slide.is_current())
                .map(|slide| slide.index())
                .collect();
            prop_assert_eq!(&current, &vec![deck.current_index()]);
            prop_assert!(deck.current_index() < deck.slide_count());
        }
    }

    #[test]
    fn prop_prev_never_consumes_build_steps((file, ops) in walk_strategy()) {
        let mut deck = Deck::new(file, DeckConfig::default(), Box::new(MemorySettings::new()))
            .expect("deck builds");
        deck.start();

        for op in &ops {
            if matches!(op, NavOp::Prev) {
                let left = deck.current_index();
                let before: Vec<usize> = deck
                    .slides()
                    .iter()
                    .map(|slide| slide.pending_steps())
                    .collect();
                deck.prev();
                // The slide we left keeps its progress exactly; elsewhere
                // a first visit may lazily fill a queue, never drain one.
                prop_assert_eq!(deck.slides()[left].pending_steps(), before[left]);
                for (slide, pending_before) in deck.slides().iter().zip(&before) {
                    prop_assert!(slide.pending_steps() >= *pending_before);
                }
            } else {
                apply(&mut deck, op);
            }
        }
    }

    #[test]
    fn prop_history_grows_only_on_direct_navigation((file, ops) in walk_strategy()) {
        let mut deck = Deck::new(file, DeckConfig::default(), Box::new(MemorySettings::new()))
            .expect("deck builds");
        deck.start();

        for op in &ops {
            let before = deck.history_len();
            apply(&mut deck, op);
            match op {
                NavOp::Back | NavOp::Forward => {
                    prop_assert_eq!(deck.history_len(), before);
                }
                _ => {
                    // Direct navigation records at most one entry; a
                    // truncated forward branch can shrink the stack.
                    prop_assert!(deck.history_len() <= before + 1);
                }
            }
        }
    }

    #[test]
    fn prop_visited_slides_stay_visited((file, ops) in walk_strategy()) {
        let mut deck = Deck::new(file, DeckConfig::default(), Box::new(MemorySettings::new()))
            .expect("deck builds");
        deck.start();

        let mut seen = vec![false; deck.slide_count()];
        seen[deck.current_index()] = true;
        for op in &ops {
            apply(&mut deck, op);
            seen[deck.current_index()] = true;
            for (slide, was_seen) in deck.slides().iter().zip(&seen) {
                prop_assert_eq!(slide.visited(), *was_seen);
            }
        }
    }
}
