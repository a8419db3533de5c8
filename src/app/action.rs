/// Side effects the event loop performs after the handler has updated state.
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
}
