/// Generates prefixed accessors for named channels of a [`Host`](crate::Host).
///
/// For each `channel: listeners, add_listener, signals;` entry the macro adds
/// three inherent methods to the host type:
///
/// | generated         | forwards to                                  |
/// |-------------------|----------------------------------------------|
/// | `listeners(&self)`| [`Host::channel_listeners`](crate::Host::channel_listeners) |
/// | `add_listener(&mut self, l)` | [`Host::add_channel_listener`](crate::Host::add_channel_listener) |
/// | `signals(&self)`  | [`Host::channel_signals`](crate::Host::channel_signals) |
///
/// Method names are spelled out by the caller; the conventional spelling for
/// channel `record` is `record_listeners, add_record_listener, record_signals`.
///
/// # Panics
/// The generated methods panic if the channel was never declared on the
/// registry the host's [`Channels`](crate::Channels) were built from.
///
/// # Example
/// ```rust
/// use std::sync::Arc;
/// use eavesdrop::{channel_accessors, Channels, Handlers, Host, ProtocolRegistry};
///
/// struct Recorder {
///     channels: Channels<str>,
/// }
///
/// impl Host for Recorder {
///     type Payload = str;
///     fn channels(&self) -> &Channels<str> { &self.channels }
///     fn channels_mut(&mut self) -> &mut Channels<str> { &mut self.channels }
/// }
///
/// channel_accessors! {
///     Recorder {
///         record: record_listeners, add_record_listener, record_signals;
///     }
/// }
///
/// let registry = ProtocolRegistry::builder()
///     .channel("record", |p| { p.send_out("added").send_out("removed"); })
///     .build()
///     .unwrap();
///
/// let mut recorder = Recorder { channels: Channels::new(registry) };
/// recorder.add_record_listener(Arc::new(
///     Handlers::<str>::new("log").on("added", |_: &str| Ok(())),
/// ));
///
/// assert_eq!(recorder.record_signals(), ["added", "removed"]);
/// assert_eq!(recorder.record_listeners().notify("added", "apple"), Ok(1));
/// assert!(recorder.listeners().is_empty());
/// ```
#[macro_export]
macro_rules! channel_accessors {
    (
        $host:ty {
            $( $channel:ident : $listeners:ident, $add:ident, $signals:ident; )+
        }
    ) => {
        impl $host {
            $(
                #[doc = concat!("Listeners of the `", stringify!($channel), "` channel.")]
                pub fn $listeners(
                    &self,
                ) -> &$crate::ListenerList<<$host as $crate::Host>::Payload> {
                    match $crate::Host::channel_listeners(self, stringify!($channel)) {
                        Ok(list) => list,
                        Err(err) => panic!("{}: {}", stringify!($host), err),
                    }
                }

                #[doc = concat!("Adds a listener to the `", stringify!($channel), "` channel.")]
                pub fn $add(
                    &mut self,
                    listener: ::std::sync::Arc<
                        dyn $crate::Listener<<$host as $crate::Host>::Payload>,
                    >,
                ) {
                    if let Err(err) =
                        $crate::Host::add_channel_listener(self, stringify!($channel), listener)
                    {
                        panic!("{}: {}", stringify!($host), err);
                    }
                }

                #[doc = concat!("Declared signals of the `", stringify!($channel), "` channel.")]
                pub fn $signals(&self) -> &[$crate::Signal] {
                    match $crate::Host::channel_signals(self, stringify!($channel)) {
                        Ok(signals) => signals,
                        Err(err) => panic!("{}: {}", stringify!($host), err),
                    }
                }
            )+
        }
    };
}
