//! Sub-records shared across PDUs.

mod emissions;
mod variable_datum;

pub use emissions::{
    ElectronicEmissionBeamData, ElectronicEmissionSystemData, EmitterSystem, FundamentalParameterData,
    TrackJamTarget,
};
pub use variable_datum::VariableDatum;

dis_record! {
    /// Unique designation of a simulated entity.
    #[derive(Copy, Eq)]
    pub struct EntityId {
        pub site: u16,
        pub application: u16,
        pub entity: u16,
    }
}

dis_record! {
    #[derive(Copy, Eq)]
    pub struct SimulationAddress {
        pub site: u16,
        pub application: u16,
    }
}

dis_record! {
    /// Identifies an event (fire, detonation, collision) so that related
    /// PDUs can be correlated.
    #[derive(Copy, Eq)]
    pub struct EventId {
        pub site: u16,
        pub application: u16,
        pub event_number: u16,
    }
}

dis_record! {
    #[derive(Copy, Eq)]
    pub struct EntityType {
        pub kind: u8,
        pub domain: u8,
        pub country: u16,
        pub category: u8,
        pub subcategory: u8,
        pub specific: u8,
        pub extra: u8,
    }
}

dis_record! {
    #[derive(Copy, Eq)]
    pub struct RadioEntityType {
        pub kind: u8,
        pub domain: u8,
        pub country: u16,
        pub category: u8,
        pub nomenclature_version: u8,
        pub nomenclature: u16,
    }
}

dis_record! {
    #[derive(Copy)]
    pub struct Vector3Float {
        pub x: f32,
        pub y: f32,
        pub z: f32,
    }
}

dis_record! {
    /// World coordinates, metres.
    #[derive(Copy)]
    pub struct Vector3Double {
        pub x: f64,
        pub y: f64,
        pub z: f64,
    }
}

dis_record! {
    /// Euler angles, radians.
    #[derive(Copy)]
    pub struct Orientation {
        pub psi: f32,
        pub theta: f32,
        pub phi: f32,
    }
}

dis_record! {
    #[derive(Copy)]
    pub struct ArticulationParameter {
        pub parameter_type_designator: u8,
        pub change_indicator: u8,
        pub part_attached_to: u16,
        pub parameter_type: u32,
        pub parameter_value: f64,
    }
}

dis_record! {
    #[derive(Copy)]
    pub struct DeadReckoningParameter {
        pub dead_reckoning_algorithm: u8,
        pub other_parameters: [u8; 15],
        pub entity_linear_acceleration: Vector3Float,
        pub entity_angular_velocity: Vector3Float,
    }
}

dis_record! {
    /// Eleven-character entity label.
    #[derive(Copy, Eq)]
    pub struct Marking {
        pub character_set: u8,
        pub characters: [u8; 11],
    }
}

impl Marking {
    /// ASCII marking; input longer than eleven bytes is truncated.
    pub fn ascii(text: &str) -> Self {
        let mut characters = [0u8; 11];
        let bytes = text.as_bytes();
        let n = bytes.len().min(characters.len());
        characters[..n].copy_from_slice(&bytes[..n]);
        Self {
            character_set: 1,
            characters,
        }
    }

    /// Characters up to the first NUL.
    pub fn text(&self) -> String {
        let end = self
            .characters
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(self.characters.len());
        String::from_utf8_lossy(&self.characters[..end]).into_owned()
    }
}

dis_record! {
    #[derive(Copy, Eq)]
    pub struct BurstDescriptor {
        pub munition: EntityType,
        pub warhead: u16,
        pub fuse: u16,
        pub quantity: u16,
        pub rate: u16,
    }
}

dis_record! {
    #[derive(Copy, Eq)]
    pub struct ClockTime {
        pub hour: u32,
        pub time_past_hour: u32,
    }
}

dis_record! {
    #[derive(Copy, Eq)]
    pub struct FixedDatum {
        pub fixed_datum_id: u32,
        pub fixed_datum_value: u32,
    }
}

dis_record! {
    #[derive(Copy)]
    pub struct SupplyQuantity {
        pub supply_type: EntityType,
        pub quantity: f32,
    }
}

dis_record! {
    #[derive(Copy, Eq)]
    pub struct ModulationType {
        pub spread_spectrum: u16,
        pub major: u16,
        pub detail: u16,
        pub system: u16,
    }
}
