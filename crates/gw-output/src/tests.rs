//! Integration tests for gw-output.

#[cfg(test)]
mod csv_tests {
    use gw_agent::AgentState;
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{AgentSnapshotRow, FrameSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent_id: u32, frame: u64) -> AgentSnapshotRow {
        AgentSnapshotRow {
            agent_id,
            frame,
            state:     AgentState::Moving,
            cell_x:    agent_id as i32,
            cell_y:    2,
            pos_x:     agent_id as f32 + 0.5,
            pos_y:     2.0,
            route_len: 3,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_snapshots.csv").exists());
        assert!(dir.path().join("frame_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["agent_id", "frame", "state", "cell_x", "cell_y", "pos_x", "pos_y", "route_len"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("frame_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["frame", "elapsed_secs", "moving_agents"]);
    }

    #[test]
    fn csv_snapshot_fields() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "1");      // agent_id
        assert_eq!(&rows[1][1], "5");      // frame
        assert_eq!(&rows[1][2], "moving"); // state
        assert_eq!(&rows[1][3], "1");      // cell_x
        assert_eq!(&rows[1][5], "1.500");  // pos_x
        assert_eq!(&rows[1][7], "3");      // route_len
    }

    #[test]
    fn csv_frame_summary_fields() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_frame_summary(&FrameSummaryRow { frame: 3, elapsed_secs: 0.75, moving_agents: 2 })
            .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("frame_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "0.7500");
        assert_eq!(&rows[0][2], "2");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_errors() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("does/not/exist")).is_err());
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use std::sync::Arc;

    use gw_agent::AgentConfig;
    use gw_behavior::{BehaviorKind, TargetSnapshot};
    use gw_core::{GridCoord, SimConfig, Vec2};
    use gw_grid::{GridMapBuilder, GridPlanner};
    use gw_sim::{SimBuilder, SimObserver};

    use crate::{AgentSnapshotRow, CsvWriter, FrameSummaryRow, OutputError, OutputResult, OutputWriter, SimOutputObserver};

    fn config(total_frames: u64, interval: u64) -> SimConfig {
        SimConfig {
            frame_secs:             0.5,
            total_frames,
            seed:                   1,
            num_threads:            Some(1),
            output_interval_frames: interval,
        }
    }

    /// In-memory writer that can be told to fail.
    #[derive(Default)]
    struct MemWriter {
        snapshots: Vec<AgentSnapshotRow>,
        summaries: Vec<FrameSummaryRow>,
        finished:  usize,
        fail:      bool,
    }

    impl OutputWriter for MemWriter {
        fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
            if self.fail {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.snapshots.extend_from_slice(rows);
            Ok(())
        }

        fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()> {
            self.summaries.push(*row);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn observer_records_rows() {
        let cfg = config(4, 2);
        let map = Arc::new(GridMapBuilder::new(6, 6).build().unwrap());
        let mut sim = SimBuilder::new(cfg.clone(), map, GridPlanner::new(), TargetSnapshot::at(Vec2::ZERO))
            .agent_at(AgentConfig::new(BehaviorKind::Wander), GridCoord::new(3, 4))
            .agent(AgentConfig::new(BehaviorKind::ChaseDirect))
            .build()
            .unwrap();

        let mut obs = SimOutputObserver::new(MemWriter::default(), &cfg);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert_eq!(w.summaries.len(), 4);
        assert_eq!(w.summaries[3].frame, 3);
        assert_eq!(w.summaries[3].elapsed_secs, 1.5);
        // Snapshots at frames 0 and 2, two agents each.
        assert_eq!(w.snapshots.len(), 4);
        assert_eq!(w.snapshots[0].frame, 0);
        assert_eq!(w.snapshots[0].agent_id, 0);
        assert_eq!(w.snapshots[2].frame, 2);
        assert_eq!(w.finished, 1);
    }

    #[test]
    fn first_error_is_kept() {
        let cfg = config(3, 1);
        let map = Arc::new(GridMapBuilder::new(3, 3).build().unwrap());
        let mut sim = SimBuilder::new(cfg.clone(), map, GridPlanner::new(), TargetSnapshot::default())
            .agent(AgentConfig::default())
            .build()
            .unwrap();

        let writer = MemWriter { fail: true, ..MemWriter::default() };
        let mut obs = SimOutputObserver::new(writer, &cfg);
        sim.run(&mut obs).unwrap();
        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn no_agents_no_snapshot_rows() {
        let cfg = config(2, 1);
        let mut obs = SimOutputObserver::new(MemWriter::default(), &cfg);
        obs.on_snapshot(gw_core::Frame(0), &[]);
        assert!(obs.into_writer().snapshots.is_empty());
    }

    #[test]
    fn integration_csv() {
        let cfg = config(6, 2);
        let map = Arc::new(GridMapBuilder::new(8, 8).build().unwrap());
        let mut sim = SimBuilder::new(cfg.clone(), map, GridPlanner::new(), TargetSnapshot::at(Vec2::new(4.0, 4.0)))
            .agents(vec![AgentConfig::default(); 3])
            .build()
            .unwrap();

        let dir = tempfile::tempdir().expect("create temp dir");
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, &cfg);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // output_interval = 2 → snapshots at frames 0, 2, 4 (3 frames × 3 agents).
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 9);

        let mut rdr = csv::Reader::from_path(dir.path().join("frame_summaries.csv")).unwrap();
        assert_eq!(rdr.records().count(), 6);
    }
}
