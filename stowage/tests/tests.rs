#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    use float_cmp::approx_eq;
    use itertools::Itertools;
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    use stowage::entities::{Container, Item, Placement, compute_stats};
    use stowage::geometry::geo_enums::GeoRelation;
    use stowage::geometry::primitives::{Point3, Rect};
    use stowage::geometry::quantize;
    use stowage::io::ext_repr::{ExtEdit, ExtInstance, ExtItem};
    use stowage::io::{export, import};
    use stowage::manual::{EditMode, ManualLayout, Pose, validate_edit};
    use stowage::packing::{FreeRects, find_best_fit, intersect_lists, pack};
    use stowage::util::{PackerConfig, assertions};

    const GRID: f64 = 0.01;
    const EPS: f64 = 1e-9;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    fn unit_box(id: &str) -> Item {
        Item::new(id, 1.0, 1.0, 1.0)
            .with_type_key("crate")
            .with_weight(10.0)
            .with_stackable(true)
    }

    fn random_items(rng: &mut SmallRng, n: usize) -> Vec<Item> {
        let type_keys = ["pallet", "drum", "carton"];
        (0..n)
            .map(|i| {
                let type_key = type_keys[rng.random_range(0..type_keys.len())];
                let must_stack = rng.random_bool(0.2);
                Item::new(
                    format!("item_{i}"),
                    rng.random_range(0.2..1.5),
                    rng.random_range(0.2..1.2),
                    rng.random_range(0.2..1.5),
                )
                .with_type_key(type_key)
                .with_weight(rng.random_range(0.0..200.0))
                .with_stackable(rng.random_bool(0.7))
                .with_rotatable(rng.random_bool(0.5))
                .with_must_stack(must_stack)
                .with_self_stack_only(must_stack)
            })
            .collect_vec()
    }

    fn ids(placements: &[Placement]) -> Vec<&str> {
        placements.iter().map(|p| p.id.as_str()).collect_vec()
    }

    #[test_case(1.234, 1.23; "rounds down")]
    #[test_case(1.235_001, 1.24; "rounds up")]
    #[test_case(-0.3, 0.0; "clamps negatives")]
    #[test_case(2.0, 2.0; "on the grid")]
    fn quantize_to_grid(x: f64, expected: f64) {
        assert!(approx_eq!(f64, quantize(x, GRID), expected, epsilon = 1e-12));
    }

    #[test]
    fn rect_relations() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        assert_eq!(a.relation_to(&Rect::new(0.5, 0.5, 1.0, 1.0), EPS), GeoRelation::Surrounding);
        assert_eq!(Rect::new(0.5, 0.5, 1.0, 1.0).relation_to(&a, EPS), GeoRelation::Enclosed);
        assert_eq!(a.relation_to(&Rect::new(1.0, 1.0, 2.0, 2.0), EPS), GeoRelation::Intersecting);
        //touching edges do not overlap
        assert_eq!(a.relation_to(&Rect::new(2.0, 0.0, 1.0, 1.0), EPS), GeoRelation::Disjoint);
    }

    #[test]
    fn seed_without_obstacles_is_full_floor() {
        let fr = FreeRects::seed(2.0, 6.0, &[], GRID, EPS);
        assert_eq!(fr.rects(), &[Rect::new(0.0, 0.0, 2.0, 6.0)]);
    }

    #[test]
    fn seed_carves_out_obstacles() {
        let fr = FreeRects::seed(2.0, 2.0, &[Rect::new(0.0, 0.0, 2.0, 1.0)], GRID, EPS);
        assert_eq!(fr.rects(), &[Rect::new(0.0, 1.0, 2.0, 1.0)]);

        let fr = FreeRects::seed(2.0, 2.0, &[Rect::new(0.0, 0.0, 2.0, 2.0)], GRID, EPS);
        assert!(fr.is_empty());
    }

    #[test]
    fn occupy_corner_leaves_two_maximal_rects() {
        let mut fr = FreeRects::seed(2.0, 2.0, &[], GRID, EPS);
        fr.occupy(&Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(
            fr.rects(),
            &[Rect::new(1.0, 0.0, 1.0, 2.0), Rect::new(0.0, 1.0, 2.0, 1.0)]
        );
    }

    #[test]
    fn occupy_center_leaves_four_slivers() {
        let mut fr = FreeRects::seed(3.0, 3.0, &[], GRID, EPS);
        fr.occupy(&Rect::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(
            fr.rects(),
            &[
                Rect::new(0.0, 0.0, 1.0, 3.0),
                Rect::new(2.0, 0.0, 1.0, 3.0),
                Rect::new(0.0, 0.0, 3.0, 1.0),
                Rect::new(0.0, 2.0, 3.0, 1.0),
            ]
        );
    }

    #[test]
    fn prune_drops_contained_rects() {
        let mut fr = FreeRects::seed(3.0, 3.0, &[], GRID, EPS);
        fr.occupy(&Rect::new(1.0, 1.0, 1.0, 1.0));
        //leaves a 1x1 sliver in the corner, which lies within the front rectangle
        fr.occupy(&Rect::new(0.0, 1.0, 1.0, 2.0));
        assert_eq!(
            fr.rects(),
            &[
                Rect::new(2.0, 0.0, 1.0, 3.0),
                Rect::new(0.0, 0.0, 3.0, 1.0),
                Rect::new(1.0, 2.0, 2.0, 1.0),
            ]
        );
        for (i, a) in fr.rects().iter().enumerate() {
            for (j, b) in fr.rects().iter().enumerate() {
                if i != j {
                    assert_ne!(a.relation_to(b, EPS), GeoRelation::Surrounding, "{a:?} contains {b:?}");
                }
            }
        }
    }

    #[test]
    fn best_fit_prefers_tightest_rect_and_first_on_ties() {
        let item = Item::new("a", 1.0, 1.0, 1.0);
        let allowed = [
            Rect::new(0.0, 0.0, 3.0, 3.0),
            Rect::new(5.0, 0.0, 1.0, 2.0),
            Rect::new(7.0, 0.0, 2.0, 1.0),
        ];
        let fit = find_best_fit(&item, &allowed, GRID, EPS);
        assert_eq!(fit, Some(Rect::new(5.0, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn best_fit_uses_quarter_turn_only_when_rotatable() {
        let allowed = [Rect::new(0.0, 0.0, 1.0, 2.0)];
        let fixed = Item::new("a", 2.0, 1.0, 1.0);
        assert_eq!(find_best_fit(&fixed, &allowed, GRID, EPS), None);

        let turnable = fixed.clone().with_rotatable(true);
        assert_eq!(
            find_best_fit(&turnable, &allowed, GRID, EPS),
            Some(Rect::new(0.0, 0.0, 1.0, 2.0))
        );
    }

    #[test]
    fn intersecting_lists_discards_slivers() {
        let a = [Rect::new(0.0, 0.0, 2.0, 2.0)];
        let b = [Rect::new(1.0, 1.0, 2.0, 2.0), Rect::new(2.0, 0.0, 1.0, 1.0)];
        assert_eq!(intersect_lists(&a, &b, GRID, EPS), vec![Rect::new(1.0, 1.0, 1.0, 1.0)]);
    }

    #[test]
    fn two_units_stack_on_a_single_footprint() {
        init_logger();
        let container = Container::new(1.0, 2.0, 1.0);
        let items = [unit_box("a"), unit_box("b")];
        let config = PackerConfig::default();
        let solution = pack(&container, &items, &config);

        assert_eq!(ids(&solution.placements), ["a", "b"]);
        let (base, top) = (&solution.placements[0], &solution.placements[1]);
        assert_eq!(base.z, 0.0);
        assert_eq!(top.z, 1.0);
        assert_eq!(base.footprint(), top.footprint());
        assert!(approx_eq!(f64, solution.stats.used_volume, 2.0));
        assert!(approx_eq!(f64, solution.stats.total_weight, 20.0));

        let count = solution
            .placements
            .iter()
            .filter(|p| p.footprint() == base.footprint())
            .count();
        assert_eq!(count, config.max_stack_count);
        assert!(solution.all_placed());
    }

    #[test]
    fn free_floor_is_used_before_stacking() {
        let container = Container::new(2.0, 2.0, 2.0);
        let solution = pack(&container, &[unit_box("a"), unit_box("b")], &PackerConfig::default());

        assert_eq!(solution.placements.len(), 2);
        assert!(solution.placements.iter().all(|p| p.z == 0.0));
        assert!(approx_eq!(f64, solution.stats.used_volume, 2.0));
        assert!(approx_eq!(f64, solution.stats.total_volume, 8.0));
    }

    #[test_case(2.0; "height limit")]
    #[test_case(3.0; "stack count limit")]
    fn mandatory_stack_stops_at_the_column_limit(height: f64) {
        init_logger();
        let container = Container::new(1.0, height, 1.0);
        let items = ["a", "b", "c"].map(|id| unit_box(id).with_must_stack(true));
        let solution = pack(&container, &items, &PackerConfig::default());

        assert_eq!(ids(&solution.placements), ["a", "b"]);
        assert_eq!(solution.placements[1].z, 1.0);
        assert_eq!(solution.unplaced, ["c"]);
    }

    #[test]
    fn mandatory_stack_on_non_stackable_base_places_only_the_base() {
        let container = Container::new(1.0, 2.0, 1.0);
        let items = ["a", "b"].map(|id| unit_box(id).with_must_stack(true).with_stackable(false));
        let solution = pack(&container, &items, &PackerConfig::default());

        assert_eq!(ids(&solution.placements), ["a"]);
        assert_eq!(solution.unplaced, ["b"]);
    }

    #[test]
    fn mandatory_stack_above_ground_needs_own_type_below() {
        //the crate fills the floor, the drum may not rest on it
        let container = Container::new(2.0, 2.0, 1.0);
        let items = [
            Item::new("crate", 2.0, 1.0, 1.0)
                .with_type_key("crate")
                .with_stackable(true)
                .with_must_stack(true),
            Item::new("drum", 1.0, 1.0, 1.0)
                .with_type_key("drum")
                .with_stackable(true)
                .with_must_stack(true),
        ];
        let solution = pack(&container, &items, &PackerConfig::default());

        assert_eq!(ids(&solution.placements), ["crate"]);
        assert_eq!(solution.unplaced, ["drum"]);
    }

    #[test]
    fn mandatory_stack_above_ground_lands_on_own_type() {
        init_logger();
        let container = Container::new(2.0, 2.0, 1.0);
        let drum = |id: &str, w: f64, h: f64, d: f64| {
            Item::new(id, w, h, d)
                .with_type_key("drum")
                .with_stackable(true)
                .with_must_stack(true)
        };
        let items = [
            Item::new("crate", 1.0, 1.1, 1.0)
                .with_type_key("crate")
                .with_stackable(true)
                .with_must_stack(true),
            drum("drum_base", 1.0, 1.0, 1.0),
            //too tall to go on the base, closes the column
            drum("drum_tall", 0.5, 1.2, 0.5),
            drum("drum_low", 0.5, 0.6, 0.5),
        ];
        let solution = pack(&container, &items, &PackerConfig::default());
        let find = |id: &str| solution.placements.iter().find(|p| p.id == id).unwrap();

        let (crate_, base, low) = (find("crate"), find("drum_base"), find("drum_low"));
        assert_eq!((crate_.x, base.x), (0.0, 1.0));
        //lands on the second layer, above the drum footprint instead of the crate
        assert!(approx_eq!(f64, low.z, 1.2, epsilon = 1e-9));
        assert_eq!(low.x, 1.0);
        assert_eq!(
            base.footprint().relation_to(&low.footprint(), EPS),
            GeoRelation::Surrounding
        );
        assert_eq!(solution.unplaced, ["drum_tall"]);
    }

    #[test]
    fn oversized_item_is_left_unplaced() {
        let container = Container::new(2.0, 2.0, 2.0);
        let items = [Item::new("big", 3.0, 1.0, 3.0).with_rotatable(true), unit_box("a")];
        let solution = pack(&container, &items, &PackerConfig::default());

        assert_eq!(ids(&solution.placements), ["a"]);
        assert_eq!(solution.unplaced, ["big"]);
    }

    #[test]
    fn degenerate_and_empty_inputs() {
        let container = Container::new(2.0, 2.0, 2.0);
        let config = PackerConfig::default();

        let empty = pack(&container, &[], &config);
        assert!(empty.placements.is_empty());
        assert!(approx_eq!(f64, empty.stats.total_volume, 8.0));
        assert_eq!(empty.stats.center_of_mass, 0.0);

        let flat = pack(&container, &[Item::new("flat", 1.0, 0.001, 1.0)], &config);
        assert!(flat.placements.is_empty());
        assert_eq!(flat.unplaced, ["flat"]);
    }

    #[test]
    fn non_stackable_floor_items_block_later_layers() {
        let container = Container::new(2.0, 2.0, 1.0);
        let items = [
            Item::new("fragile", 1.0, 1.0, 1.0),
            Item::new("sturdy", 1.0, 1.0, 1.0).with_stackable(true),
            Item::new("low", 1.0, 0.5, 1.0),
        ];
        let solution = pack(&container, &items, &PackerConfig::default());

        let fragile = solution.placements.iter().find(|p| p.id == "fragile").unwrap();
        let low = solution.placements.iter().find(|p| p.id == "low").unwrap();
        assert_eq!((fragile.x, fragile.z), (0.0, 0.0));
        assert_eq!((low.x, low.z), (1.0, 1.0));
    }

    #[test]
    fn self_stack_only_requires_own_type_below() {
        let container = Container::new(2.0, 2.0, 1.0);
        let items = [
            Item::new("a", 1.0, 1.0, 1.0).with_type_key("crate").with_stackable(true),
            Item::new("b", 1.0, 1.0, 1.0).with_type_key("drum").with_stackable(true),
            Item::new("c", 1.0, 0.5, 1.0)
                .with_type_key("drum")
                .with_self_stack_only(true),
        ];
        let solution = pack(&container, &items, &PackerConfig::default());

        let c = solution.placements.iter().find(|p| p.id == "c").unwrap();
        let b = solution.placements.iter().find(|p| p.id == "b").unwrap();
        assert_eq!(c.z, 1.0);
        assert_eq!(c.footprint(), b.footprint());
    }

    #[test_case(0; "seed 0")]
    #[test_case(1; "seed 1")]
    #[test_case(2; "seed 2")]
    #[test_case(3; "seed 3")]
    #[test_case(4; "seed 4")]
    fn random_instances_are_feasible(seed: u64) {
        init_logger();
        let mut rng = SmallRng::seed_from_u64(seed);
        let container = Container::new(2.4, 2.5, 6.0);
        let items = random_items(&mut rng, 60);
        let config = PackerConfig::default();

        let solution = pack(&container, &items, &config);
        let tol = config.collision_tolerance;

        assert!(assertions::placements_are_feasible(&solution.placements, &solution.container, tol));
        assert!(assertions::column_limit_respected(&solution.placements, config.max_stack_count, tol));
        assert!(assertions::stats_match(&solution.stats, &solution.placements, &solution.container));
        assert_eq!(solution.placements.len() + solution.unplaced.len(), items.len());

        let placed_volume: f64 = solution.placements.iter().map(|p| p.volume()).sum();
        assert!(approx_eq!(f64, solution.stats.used_volume, placed_volume, epsilon = 1e-9));

        //deterministic
        let again = pack(&container, &items, &config);
        assert_eq!(solution.placements, again.placements);
        assert_eq!(solution.unplaced, again.unplaced);
    }

    #[test]
    fn stats_are_idempotent() {
        let mut rng = SmallRng::seed_from_u64(0);
        let container = Container::new(2.4, 2.5, 6.0);
        let solution = pack(&container, &random_items(&mut rng, 30), &PackerConfig::default());

        let first = compute_stats(&solution.placements, &solution.container);
        let second = compute_stats(&solution.placements, &solution.container);
        assert_eq!(first, second);
    }

    #[test]
    fn center_of_mass_is_weighted_depth_center() {
        let container = Container::new(1.0, 1.0, 4.0);
        let light = Item::new("light", 1.0, 1.0, 1.0).with_weight(10.0);
        let placements = [
            Placement::new(&light, Point3(0.0, 0.0, 0.0), (1.0, 1.0)),
            Placement::new(&light.clone().with_weight(30.0), Point3(0.0, 2.0, 0.0), (1.0, 1.0)),
        ];
        let stats = compute_stats(&placements, &container);
        //(0.5 * 10 + 2.5 * 30) / 40
        assert!(approx_eq!(f64, stats.center_of_mass, 2.0));
        assert!(approx_eq!(f64, stats.occupancy(), 0.5));
    }

    fn two_box_layout() -> ManualLayout {
        let container = Container::new(3.0, 3.0, 3.0);
        let item = Item::new("a", 1.0, 1.0, 1.0).with_weight(5.0);
        let placements = [
            Placement::new(&item, Point3(0.0, 0.0, 0.0), (1.0, 1.0)),
            Placement::new(&Item::new("b", 1.0, 1.0, 1.0), Point3(1.0, 1.0, 1.0), (1.0, 1.0)),
        ];
        ManualLayout::new(container, placements, PackerConfig::default())
    }

    #[test]
    fn overlapping_edit_is_rejected() {
        init_logger();
        let mut layout = two_box_layout();
        let before = layout.placements().cloned().collect_vec();
        let stats = layout.stats();

        //overlaps b by 1mm along every axis
        let pose = Pose::new(Point3(1.499, 1.499, 1.499));
        let outcome = layout.apply_edit("a", pose, EditMode::Translate, None);

        assert!(!outcome.accepted);
        assert_eq!(outcome.placement.as_ref(), Some(&before[0]));
        assert_eq!(layout.placements().cloned().collect_vec(), before);
        assert_eq!(layout.stats(), stats);
        assert_eq!(layout.last_valid_pose("a"), Some(Pose::from(&before[0])));
    }

    #[test]
    fn translate_snaps_and_clamps() {
        let mut layout = two_box_layout();

        let outcome = layout.apply_edit("a", Pose::new(Point3(2.26, 0.74, 0.5)), EditMode::Translate, Some(0.5));
        assert!(outcome.accepted);
        let a = layout.get("a").unwrap();
        assert!(approx_eq!(f64, a.x, 2.0));
        assert!(approx_eq!(f64, a.y, 0.0));
        assert!(approx_eq!(f64, a.z, 0.0));

        let outcome = layout.apply_edit("a", Pose::new(Point3(10.0, -5.0, 0.5)), EditMode::Translate, None);
        assert!(outcome.accepted);
        let a = layout.get("a").unwrap();
        assert!(approx_eq!(f64, a.x, 2.0));
        assert!(approx_eq!(f64, a.y, 0.0));
        assert!(assertions::all_within_container(&[a.clone()], &layout.container, EPS));
    }

    #[test]
    fn accepted_edit_updates_stats() {
        let mut layout = two_box_layout();
        assert!(approx_eq!(f64, layout.stats().center_of_mass, 0.5));

        let outcome = layout.apply_edit("a", Pose::new(Point3(0.5, 2.5, 0.5)), EditMode::Translate, None);
        assert!(outcome.accepted);
        assert!(approx_eq!(f64, layout.stats().center_of_mass, 2.5));
        assert!(approx_eq!(f64, layout.stats().used_volume, 2.0));
    }

    #[test]
    fn rotation_keeps_only_yaw() {
        let container = Container::new(4.0, 1.0, 4.0);
        let long = Item::new("long", 2.0, 1.0, 1.0);
        let mut layout = ManualLayout::new(
            container,
            [Placement::new(&long, Point3(1.0, 1.5, 0.0), (2.0, 1.0))],
            PackerConfig::default(),
        );

        let pose = Pose::new(Point3(2.0, 2.0, 0.5)).with_rotation(0.3, -0.2, FRAC_PI_2);
        let outcome = layout.apply_edit("long", pose, EditMode::RotateYaw, Some(0.5));
        assert!(outcome.accepted);

        let p = layout.get("long").unwrap();
        assert_eq!(p.yaw, FRAC_PI_2);
        let bbox = p.bbox();
        assert!(approx_eq!(f64, bbox.w, 1.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, bbox.d, 2.0, epsilon = 1e-9));

        //translating resets the rotation
        let outcome = layout.apply_edit("long", pose, EditMode::Translate, None);
        assert!(outcome.accepted);
        assert_eq!(layout.get("long").unwrap().yaw, 0.0);
    }

    #[test]
    fn rotation_into_a_neighbour_is_rejected() {
        let container = Container::new(4.0, 1.0, 4.0);
        let placements = [
            Placement::new(&Item::new("long", 2.0, 1.0, 1.0), Point3(0.0, 0.0, 0.0), (2.0, 1.0)),
            Placement::new(&Item::new("cube", 1.0, 1.0, 1.0), Point3(0.0, 1.5, 0.0), (1.0, 1.0)),
        ];
        let config = PackerConfig::default();

        let pose = Pose::new(Point3(1.0, 0.5, 0.5)).with_rotation(0.0, 0.0, FRAC_PI_2);
        let outcome = validate_edit(&placements, "long", pose, &container, EditMode::RotateYaw, None, &config);
        assert!(!outcome.accepted);
        assert_eq!(outcome.placement.as_ref(), Some(&placements[0]));
    }

    #[test_case(FRAC_PI_4, false; "turned box exceeds the container")]
    #[test_case(0.0, true; "unturned box fits")]
    fn turning_beyond_the_container_is_rejected(yaw: f64, accepted: bool) {
        let container = Container::new(2.0, 1.0, 2.0);
        let slab = Item::new("slab", 1.9, 1.0, 1.9);
        let placements = [Placement::new(&slab, Point3(0.0, 0.0, 0.0), (1.9, 1.9))];
        let config = PackerConfig::default();

        let pose = Pose::new(Point3(1.0, 1.0, 0.5)).with_rotation(0.0, 0.0, yaw);
        let outcome = validate_edit(&placements, "slab", pose, &container, EditMode::RotateYaw, None, &config);
        assert_eq!(outcome.accepted, accepted);

        let after = outcome.placement.unwrap();
        assert!(assertions::all_within_container(&[after.clone()], &container, config.collision_tolerance));
        if !accepted {
            assert_eq!(after, placements[0]);
        }
    }

    #[test]
    fn unknown_id_is_a_rejected_edit() {
        let mut layout = two_box_layout();
        let outcome = layout.apply_edit("ghost", Pose::default(), EditMode::Translate, None);
        assert!(!outcome.accepted);
        assert!(outcome.placement.is_none());
    }

    #[test]
    fn remove_and_clear() {
        let mut layout = two_box_layout();
        assert_eq!(layout.remove("a").map(|p| p.id), Some("a".to_string()));
        assert!(layout.remove("a").is_none());
        assert_eq!(layout.len(), 1);
        assert!(approx_eq!(f64, layout.stats().used_volume, 1.0));

        layout.clear();
        assert!(layout.is_empty());
        assert_eq!(layout.stats().total_weight, 0.0);
        assert!(approx_eq!(f64, layout.stats().total_volume, 27.0));
    }

    #[test_case(0; "seed 0")]
    #[test_case(1; "seed 1")]
    #[test_case(2; "seed 2")]
    fn random_edits_keep_layout_feasible(seed: u64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let container = Container::new(2.4, 2.5, 6.0);
        let config = PackerConfig::default();
        let solution = pack(&container, &random_items(&mut rng, 40), &config);
        let mut layout = ManualLayout::from_solution(&solution, config);
        let ids = solution.placements.iter().map(|p| p.id.clone()).collect_vec();

        for _ in 0..200 {
            let id = &ids[rng.random_range(0..ids.len())];
            let before = layout.placements().cloned().collect_vec();
            let original = layout.get(id).cloned().unwrap();

            let pose = Pose::new(Point3(
                rng.random_range(0.0..2.4),
                rng.random_range(0.0..6.0),
                rng.random_range(0.0..2.5),
            ))
            .with_rotation(0.0, 0.0, rng.random_range(0.0..FRAC_PI_2));
            let mode = match rng.random_bool(0.5) {
                true => EditMode::Translate,
                false => EditMode::RotateYaw,
            };

            let outcome = layout.apply_edit(id, pose, mode, Some(0.1));
            let after = layout.placements().cloned().collect_vec();
            match outcome.accepted {
                false => assert_eq!(before, after),
                true => {
                    //moving back to the previous pose is always possible
                    let back = layout.apply_edit(id, Pose::from(&original), EditMode::RotateYaw, None);
                    assert!(back.accepted);
                    let restored = layout.get(id).unwrap();
                    assert!(approx_eq!(f64, restored.x, original.x, epsilon = 1e-9));
                    assert!(approx_eq!(f64, restored.y, original.y, epsilon = 1e-9));
                    assert!(approx_eq!(f64, restored.z, original.z, epsilon = 1e-9));
                }
            }
            let all = layout.placements().cloned().collect_vec();
            assert!(assertions::placements_are_feasible(&all, &container, config.collision_tolerance));
            assert!(assertions::stats_match(&layout.stats(), &all, &container));
        }
    }

    #[test]
    fn ext_item_flags_default_to_false() {
        let json = r#"{"id": "a", "width": 1.0, "height": 0.5, "depth": 2.0}"#;
        let ext_item: ExtItem = serde_json::from_str(json).unwrap();
        let item = import::import_item(&ext_item).unwrap();

        assert_eq!(item.weight, 0.0);
        assert!(!item.stackable && !item.rotatable && !item.must_stack && !item.self_stack_only);
        assert_eq!(item.group_key(), "a");
    }

    #[test_case(r#"{"id": "", "width": 1.0, "height": 1.0, "depth": 1.0}"#; "empty id")]
    #[test_case(r#"{"id": "a", "width": -1.0, "height": 1.0, "depth": 1.0}"#; "negative width")]
    #[test_case(r#"{"id": "a", "width": 1.0, "height": 1.0, "depth": 1.0, "weight": -3.0}"#; "negative weight")]
    fn invalid_items_are_rejected(json: &str) {
        let ext_item: ExtItem = serde_json::from_str(json).unwrap();
        assert!(import::import_item(&ext_item).is_err());
    }

    #[test]
    fn instance_round_trip_through_the_packer() {
        let json = r#"{
            "name": "van",
            "container": {"width": 1.0, "height": 2.0, "depth": 1.0},
            "items": [
                {"id": "a", "type_key": "crate", "width": 1.0, "height": 1.0, "depth": 1.0, "weight": 10.0, "stackable": true},
                {"id": "b", "type_key": "crate", "width": 1.0, "height": 1.0, "depth": 1.0, "weight": 10.0, "stackable": true}
            ]
        }"#;
        let ext_instance: ExtInstance = serde_json::from_str(json).unwrap();
        let (container, items) = import::import_instance(&ext_instance).unwrap();
        let solution = pack(&container, &items, &PackerConfig::default());

        let ext_solution = export::export(&solution, solution.time_stamp);
        assert_eq!(ext_solution.placements.len(), 2);
        assert_eq!(ext_solution.placements[1].z, 1.0);
        assert!(approx_eq!(f64, ext_solution.stats.occupancy, 1.0));
        assert_eq!(ext_solution.run_time_ms, 0);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let item = ExtItem {
            id: "a".to_string(),
            type_key: None,
            width: 1.0,
            height: 1.0,
            depth: 1.0,
            weight: 0.0,
            stackable: false,
            rotatable: false,
            must_stack: false,
            self_stack_only: false,
        };
        assert!(import::import_items(&[item.clone(), item]).is_err());
    }

    #[test]
    fn edits_are_imported_with_default_rotation() {
        let json = r#"{"placement_id": "a", "mode": "rotate_yaw", "center": [1.0, 2.0, 0.5]}"#;
        let ext_edit: ExtEdit = serde_json::from_str(json).unwrap();
        let edit = import::import_edit(&ext_edit).unwrap();
        assert_eq!(edit.mode, EditMode::RotateYaw);
        assert_eq!(edit.pose, Pose::new(Point3(1.0, 2.0, 0.5)));
        assert_eq!(edit.snap, None);

        let bad = ExtEdit {
            snap: Some(-1.0),
            ..ext_edit
        };
        assert!(import::import_edit(&bad).is_err());
    }
}
