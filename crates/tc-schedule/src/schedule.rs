//! The ordered car feed.

use std::collections::HashSet;
use std::time::Duration;

use tc_core::{Car, Direction};

use crate::{ScheduleError, ScheduleResult};

/// A finite collection of cars sorted by arrival time.
///
/// Construction validates the records and assigns each car its position in
/// the global arrival order ([`Car::index`]).  Ties in arrival time are
/// broken by car id so the order is deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schedule {
    cars: Vec<Car>,
}

impl Schedule {
    /// Validate, sort, and index `cars`.
    ///
    /// Fails on duplicate ids and on arrival times that are negative, not
    /// finite, or too large to wait for.
    pub fn new(mut cars: Vec<Car>) -> ScheduleResult<Self> {
        let mut seen = HashSet::with_capacity(cars.len());
        for car in &cars {
            if car.arrival_secs < 0.0 || Duration::try_from_secs_f64(car.arrival_secs).is_err() {
                return Err(ScheduleError::InvalidArrival { car: car.id, secs: car.arrival_secs });
            }
            if !seen.insert(car.id) {
                return Err(ScheduleError::DuplicateCar(car.id));
            }
        }

        cars.sort_by(|a, b| a.arrival_secs.total_cmp(&b.arrival_secs).then(a.id.cmp(&b.id)));
        for (index, car) in cars.iter_mut().enumerate() {
            car.index = index;
        }
        Ok(Self { cars })
    }

    /// The eight-car reference scenario.
    ///
    /// | Car | Arrival | Route  |
    /// |-----|---------|--------|
    /// | 1   | 1.1     | N → N  |
    /// | 2   | 2.2     | N → N  |
    /// | 3   | 3.3     | N → W  |
    /// | 4   | 4.4     | S → S  |
    /// | 5   | 5.5     | S → E  |
    /// | 6   | 6.6     | N → N  |
    /// | 7   | 7.7     | E → N  |
    /// | 8   | 8.8     | W → N  |
    pub fn reference() -> Self {
        use Direction::*;
        let routes = [
            (North, North),
            (North, North),
            (North, West),
            (South, South),
            (South, East),
            (North, North),
            (East, North),
            (West, North),
        ];
        // Already in arrival order with unique ids.
        let cars = routes
            .into_iter()
            .enumerate()
            .map(|(index, (origin, target))| {
                let id = index as u32 + 1;
                Car { index, ..Car::new(id, origin, target, f64::from(id) * 1.1) }
            })
            .collect();
        Self { cars }
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// Cars in arrival order.
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Car> {
        self.cars.iter()
    }

    /// Cars heading in `origin`, in arrival order.
    pub fn from_direction(&self, origin: Direction) -> impl Iterator<Item = &Car> + '_ {
        self.cars.iter().filter(move |c| c.origin == origin)
    }

    /// Arrival time of the last car, or `0.0` for an empty schedule.
    pub fn last_arrival_secs(&self) -> f64 {
        self.cars.last().map_or(0.0, |c| c.arrival_secs)
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Car;
    type IntoIter = std::slice::Iter<'a, Car>;

    fn into_iter(self) -> Self::IntoIter {
        self.cars.iter()
    }
}
