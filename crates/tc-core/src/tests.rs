//! Unit tests for tc-core primitives.

#[cfg(test)]
mod direction {
    use crate::Direction;

    #[test]
    fn canonical_order_is_clockwise() {
        assert_eq!(Direction::North.index(), 0);
        assert_eq!(Direction::East.index(), 1);
        assert_eq!(Direction::South.index(), 2);
        assert_eq!(Direction::West.index(), 3);
        for d in Direction::ALL {
            assert_eq!(Direction::from_index(d.index()), d);
        }
    }

    #[test]
    fn rotations() {
        assert_eq!(Direction::North.clockwise(), Direction::East);
        assert_eq!(Direction::West.clockwise(), Direction::North);
        assert_eq!(Direction::North.counter_clockwise(), Direction::West);
        assert_eq!(Direction::East.opposite(), Direction::West);
        for d in Direction::ALL {
            assert_eq!(d.clockwise().counter_clockwise(), d);
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn parse_accepts_letters_names_and_glyphs() {
        assert_eq!("N".parse::<Direction>().unwrap(), Direction::North);
        assert_eq!("east".parse::<Direction>().unwrap(), Direction::East);
        assert_eq!(" South ".parse::<Direction>().unwrap(), Direction::South);
        assert_eq!("<".parse::<Direction>().unwrap(), Direction::West);
        assert_eq!("v".parse::<Direction>().unwrap(), Direction::South);
        for d in Direction::ALL {
            assert_eq!(d.glyph().to_string().parse::<Direction>().unwrap(), d);
            assert_eq!(d.to_string().parse::<Direction>().unwrap(), d);
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!("up".parse::<Direction>().is_err());
        assert!("".parse::<Direction>().is_err());
    }
}

#[cfg(test)]
mod geometry {
    use crate::{Direction, Quadrant, Turn, quadrant_path};

    use Direction::*;
    use Quadrant::*;

    fn path(origin: Direction, target: Direction) -> Vec<Quadrant> {
        quadrant_path(origin, Turn::between(origin, target)).as_slice().to_vec()
    }

    #[test]
    fn turn_classification() {
        assert_eq!(Turn::between(North, East), Turn::Right);
        assert_eq!(Turn::between(North, West), Turn::Left);
        assert_eq!(Turn::between(North, North), Turn::Straight);
        assert_eq!(Turn::between(North, South), Turn::Straight);
        assert_eq!(Turn::between(South, West), Turn::Right);
        assert_eq!(Turn::between(South, East), Turn::Left);
        assert_eq!(Turn::between(East, South), Turn::Right);
        assert_eq!(Turn::between(East, North), Turn::Left);
        assert_eq!(Turn::between(West, North), Turn::Right);
        assert_eq!(Turn::between(West, South), Turn::Left);
    }

    #[test]
    fn northbound_paths() {
        assert_eq!(path(North, East), vec![NorthEast]);
        assert_eq!(path(North, South), vec![NorthEast, SouthEast]);
        assert_eq!(path(North, North), vec![NorthEast, SouthEast]);
        assert_eq!(path(North, West), vec![NorthEast, SouthEast, SouthWest]);
    }

    #[test]
    fn rotated_paths() {
        assert_eq!(path(East, South), vec![SouthEast]);
        assert_eq!(path(East, West), vec![SouthEast, SouthWest]);
        assert_eq!(path(East, North), vec![SouthEast, SouthWest, NorthWest]);

        assert_eq!(path(South, West), vec![SouthWest]);
        assert_eq!(path(South, North), vec![SouthWest, NorthWest]);
        assert_eq!(path(South, East), vec![SouthWest, NorthWest, NorthEast]);

        assert_eq!(path(West, North), vec![NorthWest]);
        assert_eq!(path(West, East), vec![NorthWest, NorthEast]);
        assert_eq!(path(West, South), vec![NorthWest, NorthEast, SouthEast]);
    }

    #[test]
    fn path_length_matches_turn() {
        for origin in Direction::ALL {
            for turn in [Turn::Right, Turn::Straight, Turn::Left] {
                let p = quadrant_path(origin, turn);
                assert_eq!(p.len(), turn.quadrant_count());
                assert!(!p.is_empty());
                assert_eq!(p.as_slice()[0], Quadrant::entry_for(origin));
            }
        }
    }

    #[test]
    fn every_quadrant_borders_two_adjacent_directions() {
        for q in Quadrant::ALL {
            let [a, b] = q.bordering();
            assert_eq!(a.clockwise(), b, "{q} borders non-adjacent directions");
        }
        // The entry quadrant borders the approach it is entered from.
        for d in Direction::ALL {
            assert!(Quadrant::entry_for(d).bordering().contains(&d));
        }
    }

    #[test]
    fn opposite_right_turns_do_not_overlap() {
        let nb = quadrant_path(North, Turn::Right);
        let sb = quadrant_path(South, Turn::Right);
        assert!(!nb.overlaps(&sb));

        let left = quadrant_path(North, Turn::Left);
        assert!(left.overlaps(&sb));
        assert!(left.overlaps(&nb));
    }

    #[test]
    fn display() {
        assert_eq!(quadrant_path(North, Turn::Left).to_string(), "[NE, SE, SW]");
        assert_eq!(quadrant_path(West, Turn::Right).indices(), vec![0]);
    }
}

#[cfg(test)]
mod car {
    use crate::{Car, CarId, Direction, Quadrant, Turn};

    #[test]
    fn turn_and_path_derive_from_headings() {
        let car = Car::new(3, Direction::North, Direction::West, 3.3);
        assert_eq!(car.id, CarId(3));
        assert_eq!(car.turn(), Turn::Left);
        assert_eq!(car.path().as_slice(), &[Quadrant::NorthEast, Quadrant::SouthEast, Quadrant::SouthWest]);
    }

    #[test]
    fn display_uses_glyphs() {
        let car = Car::new(7, Direction::East, Direction::North, 7.7);
        assert_eq!(car.to_string(), "Car 7 (> ^)");
    }

    #[test]
    fn default_id_is_invalid() {
        assert_eq!(CarId::default(), CarId::INVALID);
    }
}

#[cfg(test)]
mod time {
    use std::time::Duration;

    use crate::{SimClock, TimingConfig, Turn};

    #[test]
    fn defaults_reproduce_reference_constants() {
        let t = TimingConfig::default();
        assert_eq!(t.stop_dwell_secs, 2.0);
        assert_eq!(t.crossing_secs(Turn::Right), 3.0);
        assert_eq!(t.crossing_secs(Turn::Straight), 4.0);
        assert_eq!(t.crossing_secs(Turn::Left), 5.0);
        t.validate().unwrap();
    }

    #[test]
    fn turn_duration_ordering() {
        let t = TimingConfig::default();
        assert!(t.crossing_secs(Turn::Right) < t.crossing_secs(Turn::Straight));
        assert!(t.crossing_secs(Turn::Straight) < t.crossing_secs(Turn::Left));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let bad_scale = TimingConfig::scaled(0.0);
        assert!(bad_scale.validate().is_err());

        let negative = TimingConfig { stop_dwell_secs: -1.0, ..TimingConfig::default() };
        assert!(negative.validate().is_err());

        let nan = TimingConfig { straight_secs: f64::NAN, ..TimingConfig::default() };
        assert!(nan.validate().is_err());

        let unordered = TimingConfig { right_turn_secs: 4.0, ..TimingConfig::default() };
        assert!(unordered.validate().is_err());
    }

    #[test]
    fn clock_scales_wall_time() {
        let clock = SimClock::start(0.5);
        assert_eq!(clock.wall(2.0), Duration::from_secs(1));
        assert_eq!(clock.wall(-1.0), Duration::ZERO);
    }

    #[test]
    fn validate_rejects_durations_too_long_to_wait_for() {
        let huge = TimingConfig { stop_dwell_secs: 1e20, ..TimingConfig::default() };
        assert!(huge.validate().is_err());

        // Fits at real time, overflows once scaled.
        let scaled = TimingConfig { left_turn_secs: 1e15, time_scale: 1e5, ..TimingConfig::default() };
        assert!(TimingConfig { time_scale: 1.0, ..scaled.clone() }.validate().is_ok());
        let err = scaled.validate().unwrap_err();
        assert!(err.to_string().contains("left_turn_secs"));
    }

    #[test]
    fn clock_wall_saturates_instead_of_panicking() {
        let clock = SimClock::start(2.0);
        assert_eq!(clock.time_scale(), 2.0);
        assert_eq!(clock.wall(1e20), Duration::MAX);
        assert_eq!(clock.wall(f64::INFINITY), Duration::MAX);
        assert_eq!(clock.wall(f64::NAN), Duration::ZERO);
        assert!(clock.checked_wall(1e20).is_err());
        assert!(clock.checked_wall(f64::NAN).is_err());
        assert_eq!(clock.checked_wall(1.5).unwrap(), Duration::from_secs(3));
    }

    #[test]
    fn clock_advances() {
        let clock = SimClock::start(0.001);
        clock.sleep(5.0);
        assert!(clock.elapsed_secs() >= 5.0);
        // Past deadlines return immediately.
        clock.sleep_until(0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn timing_loads_partial_json() {
        let t: TimingConfig = serde_json::from_str(r#"{ "time_scale": 0.1 }"#).unwrap();
        assert_eq!(t.time_scale, 0.1);
        assert_eq!(t.left_turn_secs, 5.0);
    }
}
