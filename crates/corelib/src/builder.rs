use crate::app::WindowConfig;
use crate::backend::{Backend, run};
use crate::events::InputEvent;
use crate::gfx::Canvas;

#[cfg(feature = "logs")]
use crate::app::logger::{LogConfig, init_logs};

pub(crate) type InitCb<S> = Box<dyn FnOnce() -> S>;
pub(crate) type EventCb<S> = Box<dyn FnMut(&mut S, &InputEvent)>;
pub(crate) type UpdateCb<S> = Box<dyn FnMut(&mut S, &mut dyn Canvas)>;
pub(crate) type CleanupCb<S> = Box<dyn FnOnce(&mut S)>;

pub struct AppBuilder<S>
where
    S: 'static,
{
    pub(crate) window: WindowConfig,
    pub(crate) init_cb: InitCb<S>,
    pub(crate) event_cb: EventCb<S>,
    pub(crate) update_cb: UpdateCb<S>,
    pub(crate) cleanup_cb: CleanupCb<S>,

    #[cfg(feature = "logs")]
    log_config: Option<LogConfig>,
}

pub(crate) fn builder<F, S>(cb: F) -> AppBuilder<S>
where
    F: FnOnce() -> S + 'static,
    S: 'static,
{
    AppBuilder {
        window: WindowConfig::default(),
        init_cb: Box::new(cb),
        event_cb: Box::new(|_, _| ()),
        update_cb: Box::new(|_, _| ()),
        cleanup_cb: Box::new(|_| ()),

        #[cfg(feature = "logs")]
        log_config: None,
    }
}

impl<S> AppBuilder<S>
where
    S: 'static,
{
    pub fn with_window(mut self, config: WindowConfig) -> Self {
        self.window = config;
        self
    }

    #[cfg(feature = "logs")]
    pub fn with_logs(mut self, config: LogConfig) -> Self {
        self.log_config = Some(config);
        self
    }

    /// Called once per polled event, before the frame's update
    pub fn on_event<F>(mut self, cb: F) -> Self
    where
        F: FnMut(&mut S, &InputEvent) + 'static,
    {
        self.event_cb = Box::new(cb);
        self
    }

    pub fn update<F, P>(mut self, mut cb: F) -> Self
    where
        F: Handler<S, P> + 'static,
    {
        self.update_cb = Box::new(move |s, canvas| cb.call(s, canvas));
        self
    }

    pub fn cleanup<F>(mut self, cb: F) -> Self
    where
        F: FnOnce(&mut S) + 'static,
    {
        self.cleanup_cb = Box::new(cb);
        self
    }

    /// Opens the SDL2 window and runs the loop until the window is closed
    #[cfg(feature = "sdl")]
    pub fn run(mut self) -> Result<(), String> {
        #[cfg(feature = "logs")]
        init_logs(self.log_config.take().unwrap_or_default());

        let mut backend = crate::backend::sdl::SdlBackend::new(&self.window)?;
        run(self, &mut backend)
    }

    /// Runs the loop on the given backend
    /// Logs are initialized only if a configuration was set with `with_logs`
    pub fn run_with<B>(mut self, backend: &mut B) -> Result<(), String>
    where
        B: Backend,
    {
        #[cfg(feature = "logs")]
        if let Some(config) = self.log_config.take() {
            init_logs(config);
        }

        run(self, backend)
    }
}

pub trait Handler<S, Params> {
    fn call(&mut self, state: &mut S, canvas: &mut dyn Canvas);
}

impl<S, Fun> Handler<S, ()> for Fun
where
    S: 'static,
    Fun: FnMut(),
{
    fn call(&mut self, _state: &mut S, _canvas: &mut dyn Canvas) {
        (*self)();
    }
}

impl<S, Fun> Handler<S, (S,)> for Fun
where
    S: 'static,
    Fun: FnMut(&mut S),
{
    fn call(&mut self, state: &mut S, _canvas: &mut dyn Canvas) {
        (*self)(state);
    }
}

impl<S, Fun> Handler<S, (S, &'static dyn Canvas)> for Fun
where
    S: 'static,
    Fun: FnMut(&mut S, &mut dyn Canvas),
{
    fn call(&mut self, state: &mut S, canvas: &mut dyn Canvas) {
        (*self)(state, canvas);
    }
}
