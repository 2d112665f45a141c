use bar_layout::core::{
    AnimationPhase, BarBuffer, BarBufferSet, BarChartDataSet, BarData, BarEntry, BarLayoutParams,
    prepare_buffer,
};
use proptest::prelude::*;

fn stack_values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(
        prop_oneof![Just(0.0), -50.0f64..50.0],
        1..6,
    )
}

fn entries() -> impl Strategy<Value = Vec<BarEntry>> {
    prop::collection::vec(
        (
            -100.0f64..100.0,
            prop_oneof![
                (-50.0f64..50.0).prop_map(|y| (y, None)),
                stack_values().prop_map(|values| (0.0, Some(values))),
            ],
        ),
        0..24,
    )
    .prop_map(|items| {
        items
            .into_iter()
            .map(|(x, (y, values))| match values {
                Some(values) => BarEntry::stacked(x, values).expect("stacked entry"),
                None => BarEntry::new(x, y).expect("entry"),
            })
            .collect()
    })
}

fn prepare(set: &BarChartDataSet, inverted: bool, phase_x: f64, phase_y: f64) -> BarBuffer {
    let phase = AnimationPhase::new(phase_x, phase_y).expect("phase");
    let params = BarLayoutParams::new(0.7, inverted, phase).expect("params");
    let mut buffer = BarBuffer::with_size(set.buffer_size());
    prepare_buffer(&mut buffer, set, params).expect("prepare");
    buffer
}

proptest! {
    #[test]
    fn buffers_match_data_set_sizes(sets in prop::collection::vec(entries(), 0..4)) {
        let data = BarData::from_bar_sets(
            sets.into_iter()
                .map(|entries| BarChartDataSet::new("set", entries))
                .collect(),
        );
        let mut buffers = BarBufferSet::new();
        buffers.init_buffers(Some(&data)).expect("init");

        let bar_sets = data.bar_data_sets().expect("bar sets");
        prop_assert_eq!(buffers.len(), bar_sets.len());
        for (buffer, set) in buffers.iter().zip(bar_sets) {
            let expected = if set.is_stacked() {
                set.entry_count() * set.stack_size()
            } else {
                set.entry_count()
            };
            prop_assert_eq!(buffer.len(), expected);
        }
    }

    #[test]
    fn reveal_is_monotonic_in_phase_x(
        entries in entries(),
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let set = BarChartDataSet::new("reveal", entries);

        let lower = prepare(&set, false, low, 1.0);
        let upper = prepare(&set, false, high, 1.0);
        prop_assert!(lower.filled() <= upper.filled());
        prop_assert!(upper.filled() <= upper.len());
        prop_assert_eq!(&upper.rects()[..lower.filled()], lower.rects());
    }

    #[test]
    fn visible_count_grows_to_entry_count(count in 0usize..500, a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let lower = AnimationPhase::new(low, 1.0).expect("phase").visible_entry_count(count);
        let upper = AnimationPhase::new(high, 1.0).expect("phase").visible_entry_count(count);
        prop_assert!(lower <= upper);
        prop_assert!(upper <= count);
        prop_assert_eq!(AnimationPhase::COMPLETE.visible_entry_count(count), count);
    }

    #[test]
    fn edges_are_tagged_once_per_bar(entries in entries(), inverted in any::<bool>()) {
        let set = BarChartDataSet::new("tags", entries);
        let buffer = prepare(&set, inverted, 1.0, 1.0);

        prop_assert_eq!(buffer.stack_top_indices().len(), set.entry_count());
        prop_assert_eq!(buffer.stack_bottom_indices().len(), set.entry_count());
        for index in buffer.stack_top_indices() {
            prop_assert!(*index < buffer.filled());
        }
    }

    #[test]
    fn stack_segments_tile_the_bar(values in stack_values(), phase_y in 0.0f64..=1.0) {
        let entry = BarEntry::stacked(0.0, values.clone()).expect("entry");
        let (positive_sum, negative_sum) = (entry.positive_sum(), entry.negative_sum());
        let set = BarChartDataSet::new("stack", vec![entry]);
        let buffer = prepare(&set, false, 1.0, phase_y);

        for rect in buffer.rects() {
            prop_assert!(rect.max_y() <= positive_sum * phase_y + 1e-9);
            prop_assert!(rect.min_y() >= -negative_sum * phase_y - 1e-9);
        }
        let covered: f64 = buffer.rects().iter().map(|rect| rect.height().abs()).sum();
        let nonzero: f64 = values.iter().map(|value| value.abs()).sum();
        prop_assert!(covered <= nonzero * phase_y + 1e-9);
    }
}
