/// Navigation targets a view can ask the shell to go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewState {
    Home,
    Create,
    Profile,
    Admin,
}
