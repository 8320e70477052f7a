//! # Navigation Controller
//!
//! State machine over a stack of screens. The top of the stack is the
//! visible screen; an empty stack means the program is done.
//!
//! ```text
//!            navigate_to(r)                on_back_pressed()
//!   [Home] ───────────────▶ [Home, r] ───────────────────▶ [Home]
//!                                                             │
//!                                          on_back_pressed()  ▼
//!                                                          [] → Exit
//! ```
//!
//! Screens never see the `Navigator`. Each one is built with a [`NavHandle`],
//! a clonable sender that can only queue commands (push, back, link an
//! overlay to a route). The UI loop applies queued commands with
//! [`Navigator::drain`], so the stack is only ever touched on the UI thread.

use std::collections::HashMap;
use std::sync::mpsc;

use log::{debug, info, warn};

use crate::api::ResourceId;
use crate::core::overlay::{Overlay, OverlayId};

/// What a screen is, before it is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    ProductDetails(ResourceId),
    Address,
    Cart,
    Profile,
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::ProductDetails(_) => "Product details",
            Route::Address => "Address",
            Route::Cart => "Cart",
            Route::Profile => "Profile",
        }
    }
}

/// Commands a screen can queue for the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum NavCommand {
    Push(Route),
    Back,
    /// Navigate to `route` once `overlay` is dismissed.
    Link { overlay: OverlayId, route: Route },
    OverlayClosed { overlay: OverlayId, dismissed: bool },
}

/// The capability screens hold: queue transitions, nothing else.
#[derive(Debug, Clone)]
pub struct NavHandle {
    tx: mpsc::Sender<NavCommand>,
}

impl NavHandle {
    /// A handle plus the receiving end of its queue, for hosting screens
    /// outside a [`Navigator`] (tests, previews).
    pub fn channel() -> (NavHandle, mpsc::Receiver<NavCommand>) {
        let (tx, rx) = mpsc::channel();
        (NavHandle { tx }, rx)
    }

    pub fn navigate_to(&self, route: Route) {
        self.send(NavCommand::Push(route));
    }

    pub fn back(&self) {
        self.send(NavCommand::Back);
    }

    /// Registers a forward transition for when `overlay` is dismissed.
    pub fn navigate_on_close(&self, overlay: &Overlay, route: Route) {
        self.send(NavCommand::Link {
            overlay: overlay.id(),
            route,
        });
    }

    pub(crate) fn send(&self, command: NavCommand) {
        if self.tx.send(command).is_err() {
            warn!("Navigation command dropped: controller is gone");
        }
    }
}

/// Builds screens for routes.
pub trait ScreenFactory<S> {
    fn build(&self, route: &Route, nav: NavHandle) -> S;
}

/// Result of applying input or queued commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The stack did not change.
    Stay,
    /// A different screen is now on top.
    Changed,
    /// The last screen was popped.
    Exit,
}

impl Transition {
    fn merge(self, other: Transition) -> Transition {
        match (self, other) {
            (Transition::Exit, _) | (_, Transition::Exit) => Transition::Exit,
            (Transition::Changed, _) | (_, Transition::Changed) => Transition::Changed,
            _ => Transition::Stay,
        }
    }
}

struct Entry<S> {
    route: Route,
    screen: S,
}

pub struct Navigator<S, F> {
    stack: Vec<Entry<S>>,
    factory: F,
    tx: mpsc::Sender<NavCommand>,
    rx: mpsc::Receiver<NavCommand>,
    links: HashMap<OverlayId, Route>,
}

impl<S, F: ScreenFactory<S>> Navigator<S, F> {
    /// Creates the controller with `root` as the only screen.
    pub fn new(factory: F, root: Route) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut navigator = Self {
            stack: Vec::new(),
            factory,
            tx,
            rx,
            links: HashMap::new(),
        };
        navigator.navigate_to(root);
        navigator
    }

    pub fn handle(&self) -> NavHandle {
        NavHandle {
            tx: self.tx.clone(),
        }
    }

    /// Builds the screen for `route` and makes it visible.
    pub fn navigate_to(&mut self, route: Route) {
        let screen = self.factory.build(&route, self.handle());
        info!("Navigate to {:?} (depth {})", route, self.stack.len() + 1);
        self.stack.push(Entry { route, screen });
    }

    /// Pops the visible screen, dropping it and everything it owns.
    pub fn on_back_pressed(&mut self) -> Transition {
        match self.stack.pop() {
            Some(entry) => info!("Back from {:?} (depth {})", entry.route, self.stack.len()),
            None => return Transition::Exit,
        }
        if self.stack.is_empty() {
            info!("Navigation stack empty, exiting");
            Transition::Exit
        } else {
            Transition::Changed
        }
    }

    /// Applies every queued command in order.
    pub fn drain(&mut self) -> Transition {
        let mut transition = Transition::Stay;
        while let Ok(command) = self.rx.try_recv() {
            if transition == Transition::Exit {
                debug!("Ignoring {:?} after exit", command);
                continue;
            }
            transition = transition.merge(self.apply(command));
        }
        transition
    }

    fn apply(&mut self, command: NavCommand) -> Transition {
        match command {
            NavCommand::Push(route) => {
                self.navigate_to(route);
                Transition::Changed
            }
            NavCommand::Back => self.on_back_pressed(),
            NavCommand::Link { overlay, route } => {
                debug!("{:?} will open {:?} when dismissed", overlay, route);
                self.links.insert(overlay, route);
                Transition::Stay
            }
            NavCommand::OverlayClosed { overlay, dismissed } => {
                match (self.links.remove(&overlay), dismissed) {
                    (Some(route), true) => {
                        self.navigate_to(route);
                        Transition::Changed
                    }
                    (Some(route), false) => {
                        debug!("{:?} discarded, dropping link to {:?}", overlay, route);
                        Transition::Stay
                    }
                    (None, _) => Transition::Stay,
                }
            }
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_running(&self) -> bool {
        !self.stack.is_empty()
    }

    pub fn top(&self) -> Option<&S> {
        self.stack.last().map(|entry| &entry.screen)
    }

    pub fn top_mut(&mut self) -> Option<&mut S> {
        self.stack.last_mut().map(|entry| &mut entry.screen)
    }

    pub fn top_route(&self) -> Option<&Route> {
        self.stack.last().map(|entry| &entry.route)
    }

    /// Every live screen, bottom first. Screens below the top still own
    /// their in-flight requests and keep receiving results.
    pub fn screens_mut(&mut self) -> impl Iterator<Item = &mut S> {
        self.stack.iter_mut().map(|entry| &mut entry.screen)
    }

    /// Whether any live screen, covered or not, matches `predicate`.
    pub fn any_screen(&self, predicate: impl Fn(&S) -> bool) -> bool {
        self.stack.iter().any(|entry| predicate(&entry.screen))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Records the route and keeps the handle, like a real screen.
    struct FakeScreen {
        route: Route,
        nav: NavHandle,
        drops: Rc<Cell<usize>>,
    }

    impl Drop for FakeScreen {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    struct FakeFactory {
        drops: Rc<Cell<usize>>,
    }

    impl ScreenFactory<FakeScreen> for FakeFactory {
        fn build(&self, route: &Route, nav: NavHandle) -> FakeScreen {
            FakeScreen {
                route: route.clone(),
                nav,
                drops: self.drops.clone(),
            }
        }
    }

    fn navigator() -> (Navigator<FakeScreen, FakeFactory>, Rc<Cell<usize>>) {
        let drops = Rc::new(Cell::new(0));
        let factory = FakeFactory {
            drops: drops.clone(),
        };
        (Navigator::new(factory, Route::Home), drops)
    }

    #[test]
    fn test_starts_with_root() {
        let (nav, _) = navigator();
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.top_route(), Some(&Route::Home));
        assert!(nav.is_running());
    }

    #[test]
    fn test_navigate_to_grows_by_one() {
        let (mut nav, _) = navigator();
        nav.navigate_to(Route::Address);
        assert_eq!(nav.depth(), 2);
        nav.navigate_to(Route::Cart);
        assert_eq!(nav.depth(), 3);
        assert_eq!(nav.top().unwrap().route, Route::Cart);
    }

    #[test]
    fn test_back_shrinks_by_one_and_drops_screen() {
        let (mut nav, drops) = navigator();
        nav.navigate_to(Route::Profile);

        assert_eq!(nav.on_back_pressed(), Transition::Changed);
        assert_eq!(nav.depth(), 1);
        assert_eq!(drops.get(), 1);
        assert_eq!(nav.top_route(), Some(&Route::Home));
    }

    #[test]
    fn test_back_from_root_exits() {
        let (mut nav, _) = navigator();
        assert_eq!(nav.on_back_pressed(), Transition::Exit);
        assert_eq!(nav.depth(), 0);
        assert!(!nav.is_running());
        assert_eq!(nav.on_back_pressed(), Transition::Exit);
    }

    #[test]
    fn test_screen_handle_queues_until_drain() {
        let (mut nav, _) = navigator();
        nav.top().unwrap().nav.navigate_to(Route::Cart);
        assert_eq!(nav.depth(), 1);

        assert_eq!(nav.drain(), Transition::Changed);
        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.drain(), Transition::Stay);
    }

    #[test]
    fn test_queued_back_past_root_exits_and_stops() {
        let (mut nav, _) = navigator();
        let handle = nav.handle();
        handle.back();
        handle.navigate_to(Route::Cart);

        assert_eq!(nav.drain(), Transition::Exit);
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn test_dismissed_overlay_triggers_linked_route() {
        let (mut nav, _) = navigator();
        let handle = nav.handle();

        let overlay = Overlay::notice(&handle, "Added", "Product added to cart");
        handle.navigate_on_close(&overlay, Route::Cart);
        assert_eq!(nav.drain(), Transition::Stay);

        overlay.dismiss();
        assert_eq!(nav.drain(), Transition::Changed);
        assert_eq!(nav.top_route(), Some(&Route::Cart));
    }

    #[test]
    fn test_discarded_overlay_only_clears_link() {
        let (mut nav, _) = navigator();
        let handle = nav.handle();

        let overlay = Overlay::notice(&handle, "Added", "Product added to cart");
        handle.navigate_on_close(&overlay, Route::Cart);
        drop(overlay);

        assert_eq!(nav.drain(), Transition::Stay);
        assert_eq!(nav.depth(), 1);
        assert!(nav.links.is_empty());
    }

    #[test]
    fn test_unlinked_overlay_close_is_noop() {
        let (mut nav, _) = navigator();
        let overlay = Overlay::notice(&nav.handle(), "Oops", "Something failed");
        overlay.dismiss();
        assert_eq!(nav.drain(), Transition::Stay);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_any_screen_sees_covered_screens() {
        let (mut nav, _) = navigator();
        nav.navigate_to(Route::Cart);

        assert!(nav.any_screen(|screen| screen.route == Route::Home));
        assert!(!nav.any_screen(|screen| screen.route == Route::Profile));
    }

    #[test]
    fn test_home_title_differs_from_app_name() {
        assert_eq!(Route::Home.title(), "Home");
        assert_ne!(Route::Home.title(), "SafeEat");
    }

    #[test]
    fn test_transition_merge() {
        assert_eq!(Transition::Stay.merge(Transition::Changed), Transition::Changed);
        assert_eq!(Transition::Changed.merge(Transition::Exit), Transition::Exit);
        assert_eq!(Transition::Stay.merge(Transition::Stay), Transition::Stay);
    }
}
