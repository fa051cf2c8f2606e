//! Unit tests for tc-schedule.

use tc_core::{Car, CarId, Direction};

use crate::{Schedule, ScheduleError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn car(id: u32, arrival: f64) -> Car {
    Car::new(id, Direction::North, Direction::North, arrival)
}

// ── Schedule ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod schedule {
    use super::*;

    #[test]
    fn sorts_by_arrival_and_assigns_indices() {
        let s = Schedule::new(vec![car(3, 5.0), car(1, 1.0), car(2, 3.0)]).unwrap();
        let ids: Vec<u32> = s.iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        let indices: Vec<usize> = s.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(s.last_arrival_secs(), 5.0);
    }

    #[test]
    fn ties_broken_by_id() {
        let s = Schedule::new(vec![car(9, 2.0), car(4, 2.0)]).unwrap();
        assert_eq!(s.cars()[0].id, CarId(4));
        assert_eq!(s.cars()[1].id, CarId(9));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let err = Schedule::new(vec![car(1, 1.0), car(1, 2.0)]).unwrap_err();
        assert!(matches!(err, ScheduleError::DuplicateCar(CarId(1))));
    }

    #[test]
    fn invalid_arrivals_rejected() {
        assert!(matches!(
            Schedule::new(vec![car(1, -0.5)]),
            Err(ScheduleError::InvalidArrival { .. })
        ));
        assert!(Schedule::new(vec![car(1, f64::INFINITY)]).is_err());
        assert!(Schedule::new(vec![car(1, f64::NAN)]).is_err());
    }

    #[test]
    fn arrival_too_far_to_wait_for_rejected() {
        assert!(matches!(
            Schedule::new(vec![car(1, 1.0), car(2, 1e20)]),
            Err(ScheduleError::InvalidArrival { car: CarId(2), .. })
        ));
    }

    #[test]
    fn empty_schedule() {
        let s = Schedule::new(Vec::new()).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.last_arrival_secs(), 0.0);
    }

    #[test]
    fn reference_scenario() {
        use Direction::*;
        let s = Schedule::reference();
        assert_eq!(s.len(), 8);
        let routes: Vec<(Direction, Direction)> = s.iter().map(|c| (c.origin, c.target)).collect();
        assert_eq!(
            routes,
            vec![
                (North, North),
                (North, North),
                (North, West),
                (South, South),
                (South, East),
                (North, North),
                (East, North),
                (West, North),
            ]
        );
        assert!((s.cars()[7].arrival_secs - 8.8).abs() < 1e-9);
        assert_eq!(s.from_direction(North).count(), 4);
        assert_eq!(s.from_direction(South).count(), 2);
        for (i, c) in s.iter().enumerate() {
            assert_eq!(c.index, i);
            assert_eq!(c.id, CarId(i as u32 + 1));
        }
        // Same result as validating and sorting the raw cars.
        assert_eq!(Schedule::new(s.cars().to_vec()).unwrap(), s);
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use super::*;
    use crate::{load_schedule_csv, load_schedule_reader};

    #[test]
    fn loads_mixed_direction_notations() {
        let csv = "\
car_id,arrival_secs,origin,target
2,2.2,^,<
1,1.1,N,N
3,3.3, south , East
";
        let s = load_schedule_reader(Cursor::new(csv)).unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.cars()[0].id, CarId(1));
        assert_eq!(s.cars()[1].origin, Direction::North);
        assert_eq!(s.cars()[1].target, Direction::West);
        assert_eq!(s.cars()[2].origin, Direction::South);
        assert_eq!(s.cars()[2].target, Direction::East);
    }

    #[test]
    fn bad_direction_is_parse_error() {
        let csv = "car_id,arrival_secs,origin,target\n1,1.0,X,N\n";
        let err = load_schedule_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, ScheduleError::Parse(ref m) if m.contains("car 1")), "{err}");
    }

    #[test]
    fn bad_number_is_parse_error() {
        let csv = "car_id,arrival_secs,origin,target\n1,soon,N,N\n";
        assert!(matches!(
            load_schedule_reader(Cursor::new(csv)),
            Err(ScheduleError::Parse(_))
        ));
    }

    #[test]
    fn duplicate_rows_rejected() {
        let csv = "car_id,arrival_secs,origin,target\n1,1.0,N,N\n1,2.0,S,S\n";
        assert!(matches!(
            load_schedule_reader(Cursor::new(csv)),
            Err(ScheduleError::DuplicateCar(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_schedule_csv(std::path::Path::new("/nonexistent/schedule.csv")).unwrap_err();
        assert!(matches!(err, ScheduleError::Io(_)));
    }
}

// ── Generator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generator {
    use super::*;
    use crate::generate_schedule;

    #[test]
    fn deterministic_for_same_seed() {
        let a = generate_schedule(50, 7, 1.5).unwrap();
        let b = generate_schedule(50, 7, 1.5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate_schedule(50, 1, 1.5).unwrap();
        let b = generate_schedule(50, 2, 1.5).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn arrivals_non_decreasing_and_ids_unique() {
        let s = generate_schedule(100, 42, 2.0).unwrap();
        assert_eq!(s.len(), 100);
        assert!(s.cars().windows(2).all(|w| w[0].arrival_secs <= w[1].arrival_secs));
        let mut ids: Vec<u32> = s.iter().map(|c| c.id.0).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=100).collect::<Vec<_>>());
    }

    #[test]
    fn zero_gap_is_allowed() {
        let s = generate_schedule(5, 3, 0.0).unwrap();
        assert!(s.iter().all(|c| c.arrival_secs == 0.0));
    }

    #[test]
    fn negative_gap_rejected() {
        assert!(matches!(generate_schedule(5, 3, -1.0), Err(ScheduleError::Core(_))));
    }

    #[test]
    fn count_beyond_id_range_rejected() {
        let too_many = u32::MAX as usize;
        assert!(matches!(generate_schedule(too_many, 3, 1.0), Err(ScheduleError::Core(_))));
        assert!(matches!(generate_schedule(too_many + 1, 3, 1.0), Err(ScheduleError::Core(_))));
    }
}
