//! One-thread-per-car driver.

use std::thread;

use parking_lot::{Condvar, Mutex};
use tracing::{info, warn};

use tc_schedule::Schedule;

use crate::{CarReport, ControlError, ControlResult, EventSink, IntersectionController, RunReport};

/// Holds every car thread until all of them exist, so a spawn failure
/// aborts the run before any car has moved.
struct StartLatch {
    state:  Mutex<Option<bool>>,
    opened: Condvar,
}

impl StartLatch {
    fn new() -> Self {
        Self { state: Mutex::new(None), opened: Condvar::new() }
    }

    /// Block until opened; `true` means go, `false` means abort.
    fn wait(&self) -> bool {
        let mut state = self.state.lock();
        loop {
            if let Some(go) = *state {
                return go;
            }
            self.opened.wait(&mut state);
        }
    }

    fn open(&self, go: bool) {
        *self.state.lock() = Some(go);
        self.opened.notify_all();
    }
}

/// Run every car of `schedule` through `controller`, each on its own named
/// thread (`car-{id}`), and wait for all of them to exit.
///
/// Every car's place in its direction's line is reserved in schedule order
/// before any thread starts, so cars from one direction queue in arrival
/// order (ties broken by id) however their threads are scheduled.  Each
/// thread then sleeps until its car's arrival offset (measured on the
/// controller's clock) and calls
/// [`run_reserved`][IntersectionController::run_reserved].  The sink's
/// `finish` is called once every thread has been joined.
///
/// # Errors
///
/// [`ControlError::Config`] if the last arrival is too far away to wait
/// for at the clock's scale, and [`ControlError::Spawn`] if a thread cannot
/// be created; no car runs in either case.  [`ControlError::CarPanicked`]
/// if a car thread panicked.
pub fn run_schedule<S: EventSink>(
    controller: &IntersectionController<S>,
    schedule:   &Schedule,
) -> ControlResult<RunReport> {
    controller.clock().checked_wall(schedule.last_arrival_secs())?;
    info!(
        cars = schedule.len(),
        last_arrival = schedule.last_arrival_secs(),
        time_scale = controller.clock().time_scale(),
        "run starting"
    );
    let latch = StartLatch::new();

    let outcome = thread::scope(|scope| -> ControlResult<Vec<CarReport>> {
        let mut handles = Vec::with_capacity(schedule.len());
        for car in schedule {
            let latch = &latch;
            let ticket = controller.reserve(car);
            let spawned = thread::Builder::new()
                .name(format!("car-{}", car.id.0))
                .spawn_scoped(scope, move || {
                    if !latch.wait() {
                        return None;
                    }
                    controller.clock().sleep_until(car.arrival_secs);
                    Some(controller.run_reserved(car, ticket))
                });
            match spawned {
                Ok(handle) => handles.push((car.id, handle)),
                Err(source) => {
                    warn!(car = car.id.0, error = %source, "spawn failed, aborting run");
                    latch.open(false);
                    return Err(ControlError::Spawn { car: car.id, source });
                }
            }
        }
        latch.open(true);

        // Join everything before inspecting results so no thread is left
        // for the scope to join.
        let joined: Vec<_> = handles
            .into_iter()
            .map(|(id, handle)| (id, handle.join()))
            .collect();
        joined
            .into_iter()
            .map(|(id, result)| match result {
                Ok(Some(report)) => Ok(report),
                Ok(None) | Err(_) => Err(ControlError::CarPanicked(id)),
            })
            .collect()
    });

    controller.sink().finish();
    let cars = outcome?;
    let report = RunReport {
        cars,
        elapsed_secs: controller.clock().elapsed_secs(),
    };
    info!(cars = report.cars.len(), makespan = report.makespan_secs(), "run complete");
    Ok(report)
}
