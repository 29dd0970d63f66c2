//! Vehicle collection

use crate::errors::{Result, TallerError};
use crate::schemas::{Stage, Vehicle};
use crate::store::{Collection, Store};

/// In-memory copy of the vehicles collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleRepository {
    vehicles: Vec<Vehicle>,
}

impl VehicleRepository {
    pub fn load<S: Store>(store: &S) -> Self {
        VehicleRepository {
            vehicles: store.get(Collection::Vehicles),
        }
    }

    pub fn persist<S: Store>(&self, store: &mut S) {
        store.set(Collection::Vehicles, &self.vehicles);
    }

    pub fn all(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn find(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// Find or fail with `NotFound`
    pub fn get(&self, id: &str) -> Result<&Vehicle> {
        self.find(id)
            .ok_or_else(|| TallerError::NotFound(format!("vehicle {}", id)))
    }

    pub fn in_stage(&self, stage: Stage) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter().filter(move |v| v.stage == stage)
    }

    /// Vehicles other than `except_id` still in the workshop with this plate
    pub fn active_with_plate<'a>(
        &'a self,
        plate: &'a str,
        except_id: Option<&'a str>,
    ) -> impl Iterator<Item = &'a Vehicle> {
        self.vehicles.iter().filter(move |v| {
            v.stage != Stage::Ready
                && v.plate.eq_ignore_ascii_case(plate)
                && Some(v.id.as_str()) != except_id
        })
    }

    pub fn insert(&mut self, vehicle: Vehicle) {
        self.vehicles.push(vehicle);
    }

    /// Replace the vehicle with the same id
    pub fn replace(&mut self, vehicle: Vehicle) -> Result<()> {
        match self.vehicles.iter_mut().find(|v| v.id == vehicle.id) {
            Some(slot) => {
                *slot = vehicle;
                Ok(())
            }
            None => Err(TallerError::NotFound(format!("vehicle {}", vehicle.id))),
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Vehicle> {
        let index = self.vehicles.iter().position(|v| v.id == id)?;
        Some(self.vehicles.remove(index))
    }
}
