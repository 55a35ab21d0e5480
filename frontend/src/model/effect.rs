use crate::model::forms::FormKind;
use crate::model::posts::InjectedCard;
use crate::model::toast::{Toast, ToastId};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SetNavbarVisible(bool),
    SetNavbarSolid(bool),
    SetMenuOpen(bool),
    ScrollIntoView { selector: String },
    InjectCards(Vec<InjectedCard>),
    HideLoadMore,
    /// Read the form's fields and feed them back as a submission.
    SubmitForm(FormKind),
    ResetForm(FormKind),
    ShowToast(Toast),
    /// Drop a toast on the spot, no exit transition.
    DiscardToast(ToastId),
    /// Start the exit transition of a toast.
    HideToast(ToastId),
    RemoveToast(ToastId),
    SetProgress(f64),
    SetParallax(f64),
}
