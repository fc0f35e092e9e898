//! Round-trip, size and auto-length behaviour across the PDU catalog.

use dis_codec::family::DistributedEmissionsFamilyPdu;
use dis_codec::pdus::*;
use dis_codec::records::*;
use dis_codec::{Codec, FaultPolicy, Pdu, PduType, Reader, Record, Writer, HEADER_SIZE};

dis_codec::dis_pdu! {
    /// Smallest useful shape: one nested record and one list.
    pub struct TaggedEntityPdu: DistributedEmissionsFamilyPdu = PduType::Designator {
        pub entity_id: EntityId,
        pub tags: Vec<u32>,
    }
    layout {
        entity_id,
        tags: count<u16>,
        tags: list,
    }
}

fn codec() -> Codec {
    Codec::with_policy(FaultPolicy::default())
}

/// Encodes, checks the size contract, decodes into a fresh value and
/// compares.
fn assert_roundtrip<P: Pdu>(mut pdu: P) -> Vec<u8> {
    let codec = codec();
    let bytes = codec.encode(&mut pdu).unwrap();
    assert_eq!(bytes.len(), pdu.encoded_size(), "{}", P::NAME);
    assert_eq!(pdu.header().length as usize, bytes.len(), "{}", P::NAME);
    assert_eq!(pdu.header().pdu_type, P::PDU_TYPE as u8, "{}", P::NAME);
    assert_eq!(pdu.header().protocol_family, P::PROTOCOL_FAMILY as u8, "{}", P::NAME);
    let back: P = codec.decode(&bytes).unwrap();
    assert_eq!(back, pdu, "{}", P::NAME);
    assert_eq!(back.structural_hash(), pdu.structural_hash(), "{}", P::NAME);
    bytes
}

fn entity(n: u16) -> EntityId {
    EntityId {
        site: 1,
        application: 2,
        entity: n,
    }
}

fn tank() -> EntityType {
    EntityType {
        kind: 1,
        domain: 1,
        country: 225,
        category: 1,
        subcategory: 1,
        specific: 3,
        extra: 0,
    }
}

fn articulation(n: usize) -> Vec<ArticulationParameter> {
    (0..n)
        .map(|i| ArticulationParameter {
            parameter_type_designator: 0,
            change_indicator: i as u8,
            part_attached_to: 0,
            parameter_type: 4096 + i as u32,
            parameter_value: i as f64 * 0.5,
        })
        .collect()
}

fn supplies(n: usize) -> Vec<SupplyQuantity> {
    (0..n)
        .map(|i| SupplyQuantity {
            supply_type: tank(),
            quantity: 10.0 * i as f32,
        })
        .collect()
}

fn fixed(n: usize) -> Vec<FixedDatum> {
    (0..n)
        .map(|i| FixedDatum {
            fixed_datum_id: 1000 + i as u32,
            fixed_datum_value: i as u32,
        })
        .collect()
}

fn variable(n: usize) -> Vec<VariableDatum> {
    (0..n)
        .map(|i| VariableDatum::new(2000 + i as u32, vec![0x5A; i * 3 + 1]))
        .collect()
}

#[test]
fn minimal_pdu_scenario() {
    let pdu = TaggedEntityPdu {
        entity_id: entity(7),
        ..Default::default()
    };
    let bytes = assert_roundtrip(pdu.clone());
    assert_eq!(bytes.len(), HEADER_SIZE + 6 + 2);
    assert_eq!(&bytes[HEADER_SIZE + 6..], &[0, 0]);
}

#[test]
fn extension_pdu_lists() {
    for n in [1usize, 5] {
        let pdu = TaggedEntityPdu {
            tags: (0..n as u32).collect(),
            ..Default::default()
        };
        let bytes = assert_roundtrip(pdu);
        assert_eq!(bytes.len(), 20 + 4 * n);
    }
}

#[test]
fn entity_information_matrix() {
    for n in [0, 1, 4] {
        let mut pdu = EntityStatePdu::default();
        pdu.base.header.exercise_id = 3;
        pdu.entity_id = entity(10);
        pdu.force_id = 1;
        pdu.entity_type = tank();
        pdu.entity_location = Vector3Double {
            x: 4_000_000.5,
            y: -250.25,
            z: 6_378_137.0,
        };
        pdu.entity_orientation.psi = 1.5;
        pdu.marking = Marking::ascii("TANK1");
        pdu.articulation_parameters = articulation(n);
        let bytes = assert_roundtrip(pdu);
        assert_eq!(bytes.len(), 144 + 16 * n);
    }

    let collision = CollisionPdu {
        issuing_entity_id: entity(1),
        colliding_entity_id: entity(2),
        mass: 1200.0,
        ..Default::default()
    };
    assert_roundtrip(collision);

    for n in [0, 1, 3] {
        let update = EntityStateUpdatePdu {
            entity_id: entity(9),
            entity_appearance: -1,
            articulation_parameters: articulation(n),
            ..Default::default()
        };
        assert_roundtrip(update);
    }
}

#[test]
fn warfare_matrix() {
    let mut fire = FirePdu::default();
    fire.base.firing_entity_id = entity(1);
    fire.base.target_entity_id = entity(2);
    fire.burst_descriptor.quantity = 4;
    fire.range = 1500.0;
    let bytes = assert_roundtrip(fire);
    assert_eq!(bytes.len(), 96);

    for n in [0, 1, 2] {
        let detonation = DetonationPdu {
            detonation_result: 1,
            articulation_parameters: articulation(n),
            ..Default::default()
        };
        let bytes = assert_roundtrip(detonation);
        assert_eq!(bytes.len(), 104 + 16 * n);
    }
}

#[test]
fn logistics_matrix() {
    for n in [0, 1, 3] {
        assert_roundtrip(ServiceRequestPdu {
            requesting_entity_id: entity(1),
            servicing_entity_id: entity(2),
            service_type_requested: 1,
            supplies: supplies(n),
            ..Default::default()
        });
        assert_roundtrip(ResupplyOfferPdu {
            supplies: supplies(n),
            ..Default::default()
        });
        assert_roundtrip(ResupplyReceivedPdu {
            supplies: supplies(n),
            ..Default::default()
        });
    }
    assert_roundtrip(ResupplyCancelPdu {
        receiving_entity_id: entity(4),
        ..Default::default()
    });
    assert_roundtrip(RepairCompletePdu {
        repair: 20,
        ..Default::default()
    });
    assert_roundtrip(RepairResponsePdu {
        repair_result: 1,
        ..Default::default()
    });
}

#[test]
fn simulation_management_matrix() {
    assert_roundtrip(CreateEntityPdu {
        request_id: 1,
        ..Default::default()
    });
    assert_roundtrip(RemoveEntityPdu {
        request_id: 2,
        ..Default::default()
    });
    assert_roundtrip(StartResumePdu {
        real_world_time: ClockTime {
            hour: 480_000,
            time_past_hour: 1234,
        },
        request_id: 3,
        ..Default::default()
    });
    assert_roundtrip(StopFreezePdu {
        reason: 2,
        frozen_behavior: 1,
        ..Default::default()
    });
    assert_roundtrip(AcknowledgePdu {
        acknowledge_flag: 1,
        response_flag: 1,
        ..Default::default()
    });

    for n in [0, 1, 3] {
        assert_roundtrip(ActionRequestPdu {
            action_id: 7,
            fixed_datums: fixed(n),
            variable_datums: variable(n),
            ..Default::default()
        });
        assert_roundtrip(ActionResponsePdu {
            request_status: 1,
            fixed_datums: fixed(n),
            variable_datums: variable(n.saturating_sub(1)),
            ..Default::default()
        });
        assert_roundtrip(DataQueryPdu {
            time_interval: 500,
            fixed_datums: fixed(n),
            ..Default::default()
        });
        assert_roundtrip(SetDataPdu {
            variable_datums: variable(n),
            ..Default::default()
        });
        assert_roundtrip(DataPdu {
            fixed_datums: fixed(n),
            variable_datums: variable(n),
            ..Default::default()
        });
        assert_roundtrip(EventReportPdu {
            event_type: 2,
            variable_datums: variable(n),
            ..Default::default()
        });
        assert_roundtrip(CommentPdu {
            variable_datums: variable(n),
            ..Default::default()
        });
    }
}

#[test]
fn radio_matrix() {
    for n in [0, 1, 3] {
        let transmitter = TransmitterPdu {
            radio_entity_type: RadioEntityType {
                kind: 7,
                nomenclature: 12,
                ..Default::default()
            },
            transmit_state: 2,
            frequency: 243_000_000,
            power: 10.0,
            antenna_pattern_list: vec![Vector3Float { x: 1.0, y: 2.0, z: 3.0 }; n],
            modulation_parameters_list: vec![Vector3Float::default(); (n + 1) % 3],
            ..Default::default()
        };
        let bytes = assert_roundtrip(transmitter);
        assert_eq!(bytes.len(), 20 + 84 + 12 * (n + (n + 1) % 3));

        let signal = SignalPdu {
            encoding_scheme: 4,
            sample_rate: 8000,
            samples: n as u16,
            data: vec![0x11; n * 5],
            ..Default::default()
        };
        let bytes = assert_roundtrip(signal);
        assert_eq!(bytes.len(), 32 + n * 5);

        assert_roundtrip(IntercomSignalPdu {
            sample_rate: 16000,
            data: vec![0x22; n],
            ..Default::default()
        });
    }
    assert_roundtrip(ReceiverPdu {
        receiver_state: 1,
        received_power: -90.5,
        transmitter_entity_id: entity(3),
        transmitter_radio_id: 1,
        ..Default::default()
    });
}

fn beams(n: usize) -> Vec<ElectronicEmissionBeamData> {
    (0..n)
        .map(|i| ElectronicEmissionBeamData {
            beam_id_number: i as u8 + 1,
            beam_parameter_index: 100 + i as u16,
            fundamental_parameter_data: FundamentalParameterData {
                frequency: 3.0e9 + i as f32,
                beam_azimuth_sweep: 0.25,
                ..Default::default()
            },
            beam_function: 2,
            jamming_mode_sequence: 7,
            track_jam_targets: (0..i)
                .map(|t| TrackJamTarget {
                    track_jam: entity(t as u16),
                    emitter_id: 1,
                    beam_id: i as u8 + 1,
                })
                .collect(),
            ..Default::default()
        })
        .collect()
}

#[test]
fn electronic_emissions_matrix() {
    for systems in [0usize, 1, 3] {
        for beam_count in [0usize, 1, 4] {
            let pdu = ElectronicEmissionsPdu {
                emitting_entity_id: entity(1),
                state_update_indicator: 1,
                systems: (0..systems)
                    .map(|s| ElectronicEmissionSystemData {
                        emitter_system: EmitterSystem {
                            emitter_name: 2500 + s as u16,
                            function: 1,
                            emitter_id_number: s as u8,
                        },
                        location: Vector3Float {
                            x: 1.0,
                            y: 0.0,
                            z: 2.5,
                        },
                        beams: beams(beam_count),
                        ..Default::default()
                    })
                    .collect(),
                ..Default::default()
            };
            // Beam i carries i targets.
            let beam_bytes: usize = (0..beam_count).map(|i| 52 + 8 * i).sum();
            let bytes = assert_roundtrip(pdu);
            assert_eq!(bytes.len(), HEADER_SIZE + 16 + systems * (20 + beam_bytes));
        }
    }
}

#[test]
fn designator_and_reliable_matrix() {
    assert_roundtrip(DesignatorPdu {
        designating_entity_id: entity(1),
        designated_entity_id: entity(2),
        designator_power: 5.0,
        ..Default::default()
    });
    assert_roundtrip(CreateEntityReliablePdu {
        required_reliability_service: 1,
        request_id: 5,
        ..Default::default()
    });
    assert_roundtrip(RemoveEntityReliablePdu {
        request_id: 6,
        ..Default::default()
    });
    assert_roundtrip(StartResumeReliablePdu {
        simulation_time: ClockTime {
            hour: 1,
            time_past_hour: 2,
        },
        ..Default::default()
    });
    for n in [0, 1, 3] {
        assert_roundtrip(CommentReliablePdu {
            fixed_datums: fixed(n),
            variable_datums: variable(n),
            ..Default::default()
        });
    }
}

#[test]
fn auto_length_is_idempotent() {
    let mut pdu = DetonationPdu {
        articulation_parameters: articulation(2),
        ..Default::default()
    };
    let codec = codec();
    let first = codec.encode(&mut pdu).unwrap();
    let second = codec.encode(&mut pdu).unwrap();
    assert_eq!(first, second);
    assert_eq!(pdu.base.header.length as usize, first.len());
}

#[test]
fn plain_write_keeps_stale_length() {
    let mut pdu = ResupplyOfferPdu {
        supplies: supplies(1),
        ..Default::default()
    };
    pdu.base.header.length = 3;
    let mut w = Writer::new();
    codec().write(&pdu, &mut w).unwrap();
    let bytes = w.flush();
    assert_eq!(&bytes[8..10], &[0, 3]);

    codec().write_with_auto_length(&mut pdu, &mut w).unwrap();
    assert_eq!(w.len(), HEADER_SIZE + 16 + 12);
    assert_eq!(pdu.base.header.length as usize, w.len());
}

#[test]
fn count_follows_sequence_after_mutation() {
    let mut pdu = ServiceRequestPdu {
        supplies: supplies(3),
        ..Default::default()
    };
    let bytes = pdu.to_bytes().unwrap();
    assert_eq!(bytes[HEADER_SIZE + 13], 3);

    pdu.supplies.truncate(1);
    let bytes = pdu.to_bytes().unwrap();
    assert_eq!(bytes[HEADER_SIZE + 13], 1);
    assert_eq!(bytes.len(), pdu.encoded_size());
}

#[test]
fn read_replaces_previous_list_contents() {
    let source = EntityStatePdu {
        articulation_parameters: articulation(1),
        ..Default::default()
    };
    let bytes = source.to_bytes().unwrap();

    let mut target = EntityStatePdu {
        articulation_parameters: articulation(5),
        ..Default::default()
    };
    let mut r = Reader::new(&bytes);
    codec().read(&mut target, &mut r).unwrap();
    assert!(r.is_empty());
    assert_eq!(target, source);
}

#[test]
fn decode_into_reuses_instance() {
    let a = AcknowledgePdu {
        request_id: 1,
        ..Default::default()
    };
    let b = AcknowledgePdu {
        request_id: 2,
        ..Default::default()
    };
    let mut slot = AcknowledgePdu::default();
    let codec = codec();
    codec.decode_into(&mut slot, &a.to_bytes().unwrap()).unwrap();
    assert_eq!(slot.request_id, 1);
    codec.decode_into(&mut slot, &b.to_bytes().unwrap()).unwrap();
    assert_eq!(slot, b);
}
