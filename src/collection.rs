use crate::button::{Button, ButtonState};
use crate::sampler::RawSample;
use crate::time::{TimeInstant, TimeSource};
use crate::types::PressEvents;

/// An identifier for a button within a collection.
///
/// Wraps the slot index so commands cannot be aimed at an arbitrary `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonId(pub usize);

impl From<usize> for ButtonId {
    fn from(id: usize) -> Self {
        ButtonId(id)
    }
}

impl From<ButtonId> for usize {
    fn from(id: ButtonId) -> Self {
        id.0
    }
}

/// Errors that can occur during collection operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CollectionError {
    /// The specified button ID does not exist in the collection.
    InvalidButtonId(ButtonId),

    /// Attempted to add a button with an ID that already exists.
    DuplicateButtonId(ButtonId),

    /// The button ID exceeds the collection's capacity.
    ButtonIdOutOfBounds { id: ButtonId, capacity: usize },
}

impl core::fmt::Display for CollectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CollectionError::InvalidButtonId(id) => {
                write!(f, "button ID {} does not exist in collection", id.0)
            }
            CollectionError::DuplicateButtonId(id) => {
                write!(f, "button ID {} already exists in collection", id.0)
            }
            CollectionError::ButtonIdOutOfBounds { id, capacity } => {
                write!(
                    f,
                    "button ID {} exceeds collection capacity of {}",
                    id.0, capacity
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CollectionError {}

/// A fixed-capacity set of independent buttons polled from one loop.
///
/// Buttons share nothing but the time source; the order they are updated in
/// does not matter.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `S` - Raw sample provider (same type for every button)
/// * `T` - Time source implementation type
/// * `U` - Callback user data type
/// * `MAX_BUTTONS` - Maximum number of buttons this collection can hold
pub struct ButtonCollection<'t, I: TimeInstant, S: RawSample, T: TimeSource<I>, U, const MAX_BUTTONS: usize> {
    buttons: [Option<Button<'t, I, S, T, U>>; MAX_BUTTONS],
}

impl<'t, I, S, T, U, const MAX_BUTTONS: usize> ButtonCollection<'t, I, S, T, U, MAX_BUTTONS>
where
    I: TimeInstant,
    S: RawSample,
    T: TimeSource<I>,
{
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self {
            buttons: core::array::from_fn(|_| None),
        }
    }

    /// Adds an initialized button under `id`.
    ///
    /// # Errors
    /// * `DuplicateButtonId` - A button with this ID already exists
    /// * `ButtonIdOutOfBounds` - The ID exceeds the collection's capacity
    pub fn add_button(
        &mut self,
        id: ButtonId,
        button: Button<'t, I, S, T, U>,
    ) -> Result<(), CollectionError> {
        let slot = self
            .buttons
            .get_mut(id.0)
            .ok_or(CollectionError::ButtonIdOutOfBounds {
                id,
                capacity: MAX_BUTTONS,
            })?;

        if slot.is_some() {
            return Err(CollectionError::DuplicateButtonId(id));
        }

        *slot = Some(button);
        Ok(())
    }

    /// Removes and returns the button under `id`.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist in the collection.
    pub fn remove_button(&mut self, id: ButtonId) -> Result<Button<'t, I, S, T, U>, CollectionError> {
        self.buttons
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or(CollectionError::InvalidButtonId(id))
    }

    /// Updates a single button.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist in the collection.
    pub fn update(&mut self, id: ButtonId) -> Result<PressEvents, CollectionError> {
        Ok(self.get_mut(id)?.update())
    }

    /// Updates every button and returns how many events fired in total.
    pub fn update_all(&mut self) -> usize {
        self.buttons
            .iter_mut()
            .flatten()
            .map(|button| button.update().len())
            .sum()
    }

    /// Returns the state of the specified button.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist in the collection.
    pub fn state(&self, id: ButtonId) -> Result<ButtonState<I>, CollectionError> {
        Ok(self.get(id)?.state())
    }

    /// Returns a reference to the specified button.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist in the collection.
    pub fn get(&self, id: ButtonId) -> Result<&Button<'t, I, S, T, U>, CollectionError> {
        self.buttons
            .get(id.0)
            .and_then(Option::as_ref)
            .ok_or(CollectionError::InvalidButtonId(id))
    }

    /// Returns a mutable reference to the specified button.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist in the collection.
    pub fn get_mut(&mut self, id: ButtonId) -> Result<&mut Button<'t, I, S, T, U>, CollectionError> {
        self.buttons
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(CollectionError::InvalidButtonId(id))
    }

    /// Returns the number of buttons currently in the collection.
    pub fn len(&self) -> usize {
        self.buttons.iter().filter(|b| b.is_some()).count()
    }

    /// Returns true if the collection contains no buttons.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the collection contains a button with the given ID.
    pub fn contains(&self, id: ButtonId) -> bool {
        matches!(self.buttons.get(id.0), Some(Some(_)))
    }
}

impl<'t, I, S, T, U, const MAX_BUTTONS: usize> Default for ButtonCollection<'t, I, S, T, U, MAX_BUTTONS>
where
    I: TimeInstant,
    S: RawSample,
    T: TimeSource<I>,
{
    fn default() -> Self {
        Self::new()
    }
}
