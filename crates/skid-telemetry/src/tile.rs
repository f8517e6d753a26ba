//! Per-tile display state and its transition rules

use std::fmt;

use crate::reading::UnitReading;

/// Overall health shown next to the tile title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkidStatus {
    Live,
    FaultDetected,
}

impl SkidStatus {
    pub fn of(reading: &UnitReading) -> Self {
        if reading.has_fault {
            SkidStatus::FaultDetected
        } else {
            SkidStatus::Live
        }
    }
}

impl fmt::Display for SkidStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkidStatus::Live => write!(f, "Live"),
            SkidStatus::FaultDetected => write!(f, "Fault Detected"),
        }
    }
}

/// Timer directive returned by chart transitions.
///
/// Every `Arm` must be answered by exactly one `Disarm`, either on the
/// reverse transition or on teardown. The caller owns the actual timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartCommand {
    Arm,
    Disarm,
}

/// The display state owned by exactly one dashboard tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileState {
    has_fault: bool,
    pub fault_panel_open: bool,
    pub chart_open: bool,
    pub flash_phase: bool,
}

impl TileState {
    pub fn new(reading: &UnitReading) -> Self {
        Self {
            has_fault: reading.has_fault,
            fault_panel_open: reading.has_fault,
            chart_open: false,
            flash_phase: false,
        }
    }

    /// Whether the fault toggle is offered at all. A unit without a fault
    /// gets no control, not a disabled one.
    pub fn offers_fault_toggle(&self) -> bool {
        self.has_fault
    }

    pub fn toggle_fault_panel(&mut self) {
        self.fault_panel_open = !self.fault_panel_open;
    }

    /// Flip the chart view. Opening arms the refresh timer, closing
    /// disarms it.
    pub fn toggle_chart(&mut self) -> ChartCommand {
        self.chart_open = !self.chart_open;
        if self.chart_open {
            ChartCommand::Arm
        } else {
            ChartCommand::Disarm
        }
    }

    /// Release the refresh timer on unmount if the chart is still open.
    pub fn teardown(&mut self) -> Option<ChartCommand> {
        if self.chart_open {
            self.chart_open = false;
            Some(ChartCommand::Disarm)
        } else {
            None
        }
    }

    /// The secondary metrics block and the chart are mutually exclusive;
    /// tank level stays visible in both modes.
    pub fn shows_secondary_metrics(&self) -> bool {
        !self.chart_open
    }

    /// Class hook for the pulsing status dot. The phase is only advanced
    /// under the `fault-flash` feature; without it this stays false.
    pub fn indicator_flashing(&self) -> bool {
        self.has_fault && self.flash_phase
    }

    pub fn advance_flash(&mut self) {
        self.flash_phase = !self.flash_phase;
    }

    pub fn fault_button_label(&self) -> &'static str {
        if self.fault_panel_open {
            "Hide Faults"
        } else {
            "Show Faults"
        }
    }

    pub fn chart_button_label(&self) -> &'static str {
        if self.chart_open {
            "Hide Plot"
        } else {
            "Show Plot"
        }
    }
}
