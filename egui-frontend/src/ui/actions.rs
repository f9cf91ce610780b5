//! # Actions Module
//!
//! Every user intent that changes state is an `AppAction`. Views queue
//! actions while rendering; `process_actions` drains the queue once the frame
//! is drawn and routes each action to exactly one mutation.
//!
//! ## Responsibilities:
//! - Open, submit and close the shared entity editor
//! - Hold deletes until they are confirmed
//! - Forward order, assignment and attendance changes to the backend
//! - Turn every outcome into a success or error message

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use log::{debug, info, warn};
use shared::{AttendanceStatus, DeliveryStatus};

use backend::domain::attendance_service::shift_date;
use backend::domain::commands::attendance::RecordAttendanceCommand;
use backend::domain::commands::customer::DeleteCustomerCommand;
use backend::domain::commands::driver::DeleteDriverCommand;
use backend::domain::commands::order::{AssignDriverCommand, UpdateOrderStatusCommand};
use backend::domain::commands::plan::DeletePlanCommand;
use backend::io::forms::entity_editor;
use backend::io::forms::{save_entity, EntityKind};

use crate::ui::app_state::{AdminDashboardApp, MainView};
use crate::ui::state::{EditorState, PendingConfirmation};

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    Navigate(MainView),

    /// Open the editor; `editing_id: None` opens it blank for a new entity
    OpenEditor { kind: EntityKind, editing_id: Option<String> },
    CloseEditor,
    SubmitEditor,

    RequestDelete { kind: EntityKind, id: String },
    ConfirmDelete,
    CancelDelete,

    UpdateOrderStatus { order_id: String, status: DeliveryStatus },
    AssignDriver { order_id: String, driver_id: Option<String> },
    AutoAssignDrivers,

    /// Record against the roster's currently selected date
    RecordAttendance { driver_id: String, status: AttendanceStatus },
    ShiftAttendanceDate(i64),
    SetAttendanceDate(NaiveDate),

    SaveSettings,
    DismissMessages,
}

impl AdminDashboardApp {
    /// Dispatch every action queued during the frame, in order
    pub fn process_actions(&mut self) {
        let actions = std::mem::take(&mut self.pending_actions);
        for action in actions {
            self.dispatch(action);
        }
    }

    pub fn dispatch(&mut self, action: AppAction) {
        debug!("Dispatching {:?}", action);
        if let Err(e) = self.apply(action) {
            warn!("Action failed: {}", e);
            self.ui.set_error(e.to_string());
        }
    }

    fn apply(&mut self, action: AppAction) -> Result<()> {
        match action {
            AppAction::Navigate(view) => {
                self.current_view = view;
                self.clear_messages();
            }
            AppAction::OpenEditor { kind, editing_id } => self.open_editor(kind, editing_id)?,
            AppAction::CloseEditor => self.editor = None,
            AppAction::SubmitEditor => self.submit_editor(),
            AppAction::RequestDelete { kind, id } => {
                self.pending_confirmation = Some(PendingConfirmation::new(kind, id));
            }
            AppAction::ConfirmDelete => self.confirm_delete()?,
            AppAction::CancelDelete => {
                if let Some(pending) = self.pending_confirmation.take() {
                    info!("Delete of {} {} cancelled", pending.kind, pending.id);
                }
            }
            AppAction::UpdateOrderStatus { order_id, status } => {
                let result = self
                    .backend
                    .order_service
                    .update_order_status(UpdateOrderStatusCommand { order_id, status })?;
                self.ui.set_success(result.success_message);
            }
            AppAction::AssignDriver { order_id, driver_id } => {
                let result = self
                    .backend
                    .order_service
                    .assign_driver(AssignDriverCommand { order_id, driver_id })?;
                self.ui.set_success(result.success_message);
            }
            AppAction::AutoAssignDrivers => {
                let result = self.backend.order_service.auto_assign_drivers()?;
                self.ui.set_success(result.success_message);
            }
            AppAction::RecordAttendance { driver_id, status } => {
                let result = self.backend.attendance_service.record_attendance(RecordAttendanceCommand {
                    driver_id,
                    date: self.drivers.attendance_date,
                    status,
                })?;
                self.ui.set_success(format!(
                    "Marked {} {} for {}",
                    result.driver.name, status, self.drivers.attendance_date
                ));
            }
            AppAction::ShiftAttendanceDate(days) => {
                self.drivers.attendance_date = shift_date(self.drivers.attendance_date, days)?;
            }
            AppAction::SetAttendanceDate(date) => self.drivers.attendance_date = date,
            AppAction::SaveSettings => {
                info!(
                    "Settings acknowledged (GST {}%, {}); nothing persisted",
                    self.settings_draft.default_gst_text, self.settings_draft.working_days
                );
                self.ui.set_success("Settings saved".to_string());
            }
            AppAction::DismissMessages => self.clear_messages(),
        }
        Ok(())
    }

    fn open_editor(&mut self, kind: EntityKind, editing_id: Option<String>) -> Result<()> {
        let form = match &editing_id {
            Some(id) => entity_editor::prefill(&self.backend, kind, id)?,
            None => entity_editor::blank(&self.backend, kind)?,
        };
        info!("Opening {} editor (editing: {:?})", kind, editing_id);
        self.editor = Some(EditorState::new(kind, editing_id, form));
        Ok(())
    }

    /// A rejected submission keeps the dialog open with the error shown inside it
    fn submit_editor(&mut self) {
        let Some(editor) = self.editor.as_mut() else {
            warn!("Submit with no editor open");
            return;
        };

        match save_entity(&self.backend, editor.kind, &editor.form, editor.editing_id.as_deref()) {
            Ok(saved) => {
                self.editor = None;
                self.ui.set_success(saved.success_message);
            }
            Err(e) => {
                warn!("{} form rejected: {}", editor.kind, e);
                editor.error = Some(e.to_string());
            }
        }
    }

    fn confirm_delete(&mut self) -> Result<()> {
        let pending = self
            .pending_confirmation
            .take()
            .ok_or_else(|| anyhow!("No delete awaiting confirmation"))?;

        let message = match pending.kind {
            EntityKind::Customer => {
                self.backend
                    .customer_service
                    .delete_customer(DeleteCustomerCommand { customer_id: pending.id })?
                    .success_message
            }
            EntityKind::Plan => {
                self.backend
                    .plan_service
                    .delete_plan(DeletePlanCommand { plan_id: pending.id })?
                    .success_message
            }
            EntityKind::Driver => {
                self.backend
                    .driver_service
                    .delete_driver(DeleteDriverCommand { driver_id: pending.id })?
                    .success_message
            }
        };
        self.ui.set_success(message);
        Ok(())
    }
}
