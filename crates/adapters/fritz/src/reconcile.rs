//! Snapshot reconciler — polled device snapshot → normalized channel
//! updates.
//!
//! One call per device per poll cycle. Each capability group is handled
//! independently: a malformed or missing group is logged and skipped,
//! the remaining groups still produce their updates. Nothing here does
//! IO — the caller publishes the returned updates.

use ahahub_domain::capability::Capability;
use ahahub_domain::channel::{ChannelId, ChannelUpdate, ChannelValue, TriState};
use ahahub_domain::heating::HeatingValue;
use ahahub_domain::snapshot::{DeviceSnapshot, HeatingReport, SwitchReport};
use ahahub_domain::time;

use crate::context::DeviceContext;

/// Reconcile one snapshot against the device's context.
///
/// Returns the channel updates to publish. Updates the stored setpoint
/// whenever a genuine (non-sentinel) set-temp value is observed.
pub fn reconcile(ctx: &mut DeviceContext, snapshot: &DeviceSnapshot) -> Vec<ChannelUpdate> {
    let ain = snapshot.identifier.as_str();
    let mut out = Vec::new();
    let mut emit =
        |channel: ChannelId, value: ChannelValue| out.push(ChannelUpdate::new(ain, channel, value));

    emit(ChannelId::Online, ChannelValue::OnOff(snapshot.is_present()));

    if ctx.capabilities.contains(Capability::TempSensor) {
        // A missing reading this cycle is not an anomaly — the sensor
        // simply had nothing to report. Skip, don't emit Undefined.
        if let Some(reading) = snapshot.temperature {
            emit(ChannelId::Temperature, ChannelValue::Number(reading.celsius()));
        }
    }

    if ctx.capabilities.contains(Capability::Powermeter) {
        if let Some(meter) = snapshot.powermeter {
            // Energy and power travel together: both or neither.
            emit(ChannelId::Energy, ChannelValue::Number(meter.energy_wh));
            emit(ChannelId::Power, ChannelValue::Number(meter.power_w));
        } else {
            tracing::warn!(ain, "powermeter capability announced but no powermeter block");
        }
    }

    if ctx.capabilities.contains(Capability::SwitchableOutlet) {
        if let Some(switch) = &snapshot.switch {
            reconcile_switch(ain, switch, &mut emit);
        } else {
            tracing::warn!(ain, "switchable outlet capability announced but no switch block");
        }
    }

    if ctx.capabilities.contains(Capability::HeatingThermostat) {
        if let Some(heating) = &snapshot.heating {
            reconcile_heating(ctx, ain, heating, &mut emit);
        } else {
            tracing::warn!(ain, "heating capability announced but no heating block");
        }
    }

    out
}

fn reconcile_switch(
    ain: &str,
    switch: &SwitchReport,
    emit: &mut impl FnMut(ChannelId, ChannelValue),
) {
    // Each flag is tri-stated independently; an unexpected integer is
    // logged and left unemitted instead of being defaulted.
    for (channel, raw) in [
        (ChannelId::Outlet, switch.state),
        (ChannelId::Locked, switch.lock),
        (ChannelId::DeviceLocked, switch.device_lock),
    ] {
        match TriState::decode(raw) {
            Ok(state) => emit(channel, state.into()),
            Err(value) => {
                tracing::warn!(ain, %channel, value, "unexpected tri-state value");
            }
        }
    }

    match &switch.mode {
        Some(mode) => emit(ChannelId::OutletMode, ChannelValue::Text(mode.clone())),
        None => emit(ChannelId::OutletMode, ChannelValue::Undefined),
    }
}

fn reconcile_heating(
    ctx: &mut DeviceContext,
    ain: &str,
    heating: &HeatingReport,
    emit: &mut impl FnMut(ChannelId, ChannelValue),
) {
    let actual = HeatingValue::from_raw(heating.actual_temp);
    emit(ChannelId::ActualTemp, ChannelValue::Number(actual.display_celsius()));

    let set = HeatingValue::from_raw(heating.set_temp);
    emit(ChannelId::SetTemp, ChannelValue::Number(set.display_celsius()));
    emit(ChannelId::SetMode, ChannelValue::Mode(set.set_mode()));
    if let Some(celsius) = set.to_celsius() {
        // Only genuine setpoints refresh the stored value; sentinels
        // must leave the "last real setpoint" intact for mode ON.
        ctx.stored_setpoint = Some(celsius);
    }

    let eco = HeatingValue::from_raw(heating.eco_temp);
    emit(ChannelId::EcoTemp, ChannelValue::Number(eco.display_celsius()));
    let comfort = HeatingValue::from_raw(heating.comfort_temp);
    emit(ChannelId::ComfortTemp, ChannelValue::Number(comfort.display_celsius()));

    if let Some(next) = heating.next_change {
        if next.end_period == 0 {
            emit(ChannelId::NextChange, ChannelValue::Undefined);
        } else if let Some(ts) = time::from_epoch_seconds(next.end_period) {
            emit(ChannelId::NextChange, ChannelValue::Timestamp(ts));
        } else {
            tracing::warn!(ain, end_period = next.end_period, "unrepresentable end period");
        }

        let next_temp = HeatingValue::from_raw(next.next_temp);
        emit(ChannelId::NextTemp, ChannelValue::Number(next_temp.display_celsius()));
    }

    match TriState::decode(heating.battery_low) {
        Ok(state) => emit(ChannelId::BatteryLow, state.into()),
        Err(value) => {
            tracing::warn!(ain, value, "unexpected battery-low value");
        }
    }
}
