//! Emitter system and beam records carried by the Electronic Emissions PDU.
//!
//! Systems hold beams and beams hold track/jam targets, each list with its
//! own `u8` count. Systems and beams also lead with their encoded size in
//! 32-bit words.

use super::{EntityId, Vector3Float};

dis_record! {
    #[derive(Copy, Eq)]
    pub struct EmitterSystem {
        pub emitter_name: u16,
        pub function: u8,
        pub emitter_id_number: u8,
    }
}

dis_record! {
    /// Operating parameters of one beam.
    #[derive(Copy)]
    pub struct FundamentalParameterData {
        pub frequency: f32,
        pub frequency_range: f32,
        pub effective_radiated_power: f32,
        pub pulse_repetition_frequency: f32,
        pub pulse_width: f32,
        pub beam_azimuth_center: f32,
        pub beam_azimuth_sweep: f32,
        pub beam_elevation_center: f32,
        pub beam_elevation_sweep: f32,
        pub beam_sweep_sync: f32,
    }
}

dis_record! {
    /// An entity tracked or jammed by a beam.
    #[derive(Copy, Eq)]
    pub struct TrackJamTarget {
        pub track_jam: EntityId,
        pub emitter_id: u8,
        pub beam_id: u8,
    }
}

dis_record! {
    pub struct ElectronicEmissionBeamData {
        pub beam_id_number: u8,
        pub beam_parameter_index: u16,
        pub fundamental_parameter_data: FundamentalParameterData,
        pub beam_function: u8,
        pub high_density_track_jam: u8,
        pub pad4: u8,
        pub jamming_mode_sequence: u32,
        pub track_jam_targets: Vec<TrackJamTarget>,
    }
    layout {
        beam_data_length: words<u8>,
        beam_id_number,
        beam_parameter_index,
        fundamental_parameter_data,
        beam_function,
        track_jam_targets: count<u8>,
        high_density_track_jam,
        pad4,
        jamming_mode_sequence,
        track_jam_targets: list,
    }
}

dis_record! {
    pub struct ElectronicEmissionSystemData {
        pub emissions_padding2: u16,
        pub emitter_system: EmitterSystem,
        pub location: Vector3Float,
        pub beams: Vec<ElectronicEmissionBeamData>,
    }
    layout {
        system_data_length: words<u8>,
        beams: count<u8>,
        emissions_padding2,
        emitter_system,
        location,
        beams: list,
    }
}
