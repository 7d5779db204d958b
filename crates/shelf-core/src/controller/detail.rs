//! View/edit state machine for a single record.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::error::{Error, InvalidInputError, StateError};
use crate::record::{FieldValue, Form, Resource, ResourceKind};
use crate::traits::CatalogClient;
use crate::Result;

/// Public view of the controller's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailMode {
    View,
    Editing,
    /// The record was removed; the host should navigate away.
    Deleted,
}

/// Where the host should go after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Back to the list of the given resource.
    ToList(ResourceKind),
}

/// The transition a toggle control performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    EnteredEdit,
    Saved,
    Cancelled,
    Deleted(Navigation),
}

#[derive(Debug)]
enum State {
    View,
    /// The snapshot lives exactly as long as edit mode.
    Editing { snapshot: Form },
    Deleted,
}

/// Owns one record's form and its view/edit lifecycle.
pub struct DetailController<R, C> {
    client: Arc<C>,
    record: R,
    form: Form,
    state: State,
}

impl<R: Resource, C: CatalogClient> DetailController<R, C> {
    /// Start in view mode on an already loaded record.
    pub fn new(client: Arc<C>, record: R) -> Self {
        let form = record.to_form();
        Self {
            client,
            record,
            form,
            state: State::View,
        }
    }

    /// Fetch a record by id and start in view mode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] if the record cannot be loaded.
    #[instrument(skip(client), fields(kind = %R::KIND))]
    pub async fn load(client: Arc<C>, id: &str) -> Result<Self> {
        debug!("Loading record");
        let record = client.get::<R>(id).await.map_err(Error::fetch)?;
        Ok(Self::new(client, record))
    }

    pub fn mode(&self) -> DetailMode {
        match self.state {
            State::View => DetailMode::View,
            State::Editing { .. } => DetailMode::Editing,
            State::Deleted => DetailMode::Deleted,
        }
    }

    /// The record as last loaded or saved.
    pub fn record(&self) -> &R {
        &self.record
    }

    /// Live form values.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Whether a field currently accepts edits.
    pub fn is_mutable(&self, field: &str) -> bool {
        matches!(self.state, State::Editing { .. })
            && self.form.spec(field).is_some_and(|spec| spec.editable)
    }

    /// View to Editing. Captures the snapshot used by [`cancel`](Self::cancel).
    pub fn enter_edit(&mut self) -> Result<()> {
        match self.state {
            State::View => {
                debug!(kind = %R::KIND, id = self.record.id(), "Entering edit mode");
                self.state = State::Editing {
                    snapshot: self.form.clone(),
                };
                Ok(())
            }
            State::Editing { .. } => Err(StateError::Editing {
                operation: "enter edit",
            }
            .into()),
            State::Deleted => Err(StateError::Deleted.into()),
        }
    }

    /// Change one field of the live form.
    ///
    /// # Errors
    ///
    /// Fails outside edit mode, for read-only or unknown fields, and for
    /// values of the wrong kind.
    pub fn set_field(&mut self, field: &str, value: FieldValue) -> Result<()> {
        self.ensure_editing("set field")?;

        if let Some(spec) = self.form.spec(field)
            && !spec.editable
        {
            return Err(StateError::ReadOnlyField {
                field: field.to_string(),
            }
            .into());
        }

        self.form.set(field, value)
    }

    /// Like [`set_field`](Self::set_field), parsing raw text by the field's kind.
    pub fn set_field_input(&mut self, field: &str, raw: &str) -> Result<()> {
        let spec = self
            .form
            .spec(field)
            .ok_or_else(|| InvalidInputError::UnknownField {
                field: field.to_string(),
            })?;
        let value = FieldValue::parse(spec, raw)?;
        self.set_field(field, value)
    }

    /// Editing to View, restoring every field from the snapshot.
    pub fn cancel(&mut self) -> Result<()> {
        match std::mem::replace(&mut self.state, State::View) {
            State::Editing { snapshot } => {
                debug!(kind = %R::KIND, id = self.record.id(), "Edit cancelled");
                self.form = snapshot;
                Ok(())
            }
            other => {
                self.state = other;
                self.ensure_editing("cancel")
            }
        }
    }

    /// Editing to View, sending the full record built from the live form.
    ///
    /// The switch to view mode happens before the backend answers. A
    /// failed save is returned as [`Error::Save`]; the form keeps the
    /// submitted values and [`record`](Self::record) already holds them,
    /// so it no longer matches what the backend stores until the record
    /// is reloaded.
    ///
    /// # Errors
    ///
    /// Fails outside edit mode or when the form cannot be turned into a
    /// record; in both cases nothing is sent and the state is unchanged.
    #[instrument(skip(self), fields(kind = %R::KIND, id = self.record.id()))]
    pub async fn save(&mut self) -> Result<()> {
        self.ensure_editing("save")?;

        let updated = R::from_form(&self.form, &self.record)?;
        self.state = State::View;
        self.record = updated;

        match self.client.save(&self.record).await {
            Ok(()) => {
                info!("Record saved");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Save failed");
                Err(Error::save(self.record.id(), err))
            }
        }
    }

    /// View to Deleted.
    ///
    /// # Errors
    ///
    /// Fails while editing (cancel first) and returns [`Error::Delete`] if
    /// the backend rejects the call, staying in view mode.
    #[instrument(skip(self), fields(kind = %R::KIND, id = self.record.id()))]
    pub async fn delete(&mut self) -> Result<Navigation> {
        match self.state {
            State::View => {}
            State::Editing { .. } => {
                return Err(StateError::Editing {
                    operation: "delete",
                }
                .into());
            }
            State::Deleted => return Err(StateError::Deleted.into()),
        }

        match self.client.delete::<R>(self.record.id()).await {
            Ok(()) => {
                info!("Record deleted");
                self.state = State::Deleted;
                Ok(Navigation::ToList(R::KIND))
            }
            Err(err) => {
                warn!(error = %err, "Delete failed");
                Err(Error::delete(self.record.id(), err))
            }
        }
    }

    /// The edit/save button: enters edit mode in view, saves in edit mode.
    pub async fn edit_or_save(&mut self) -> Result<Transition> {
        match self.state {
            State::Editing { .. } => self.save().await.map(|()| Transition::Saved),
            _ => self.enter_edit().map(|()| Transition::EnteredEdit),
        }
    }

    /// The delete/cancel button: cancels in edit mode, deletes in view.
    pub async fn delete_or_cancel(&mut self) -> Result<Transition> {
        match self.state {
            State::Editing { .. } => self.cancel().map(|()| Transition::Cancelled),
            _ => self.delete().await.map(Transition::Deleted),
        }
    }

    fn ensure_editing(&self, operation: &'static str) -> Result<()> {
        match self.state {
            State::Editing { .. } => Ok(()),
            State::View => Err(StateError::NotEditing { operation }.into()),
            State::Deleted => Err(StateError::Deleted.into()),
        }
    }
}

impl<R: std::fmt::Debug, C> std::fmt::Debug for DetailController<R, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailController")
            .field("record", &self.record)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
