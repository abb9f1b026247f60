//! Navigation engine implementation

use super::{
    NavigationChange, NavigationContext, NavigationSubscriber, NavigatorId, NavigatorState,
    Sequence, StepPosition,
};
use crate::error::NavigatorError;
use crate::playback::{AutoplayPolicy, AutoplayTimer};
use parking_lot::{Mutex, ReentrantMutex, RwLock};
use std::cell::Cell;
use std::sync::{Arc, Weak};
use tokio::runtime::Handle;
use tracing::{debug, info, trace};
use uuid::Uuid;

/// Navigation state stored internally
struct EngineState<T> {
    state: NavigatorState<T>,
    /// Bumped whenever autoplay starts or is cancelled, so a tick from an
    /// earlier session never applies.
    epoch: u64,
    /// Bumped on every committed change; stamped on notifications
    version: u64,
}

/// Autoplay configuration of an engine
struct Autoplay {
    policy: AutoplayPolicy,
    runtime: Handle,
}

/// One navigator instance shared between a renderer and its controls
///
/// All transitions run synchronously under a write lock and replace the
/// state value. Subscribers are notified after the lock is released, one
/// notification at a time and in the order the changes were committed. A
/// notification that was overtaken by a newer one before it could be
/// delivered is dropped, so the last frame a subscriber sees is always the
/// engine's current one.
pub struct NavigationEngine<T> {
    id: NavigatorId,
    inner: RwLock<EngineState<T>>,
    subscribers: RwLock<Vec<Weak<dyn NavigationSubscriber<T>>>>,
    /// Version of the last delivered notification. Reentrant so a
    /// subscriber may navigate from inside its callback.
    delivered: ReentrantMutex<Cell<u64>>,
    autoplay: Option<Autoplay>,
    timer: Mutex<Option<AutoplayTimer>>,
}

impl<T> NavigationEngine<T>
where
    T: Send + Sync + 'static,
{
    /// Create an engine positioned on the first frame, without autoplay
    pub fn new(sequence: Sequence<T>) -> Self {
        Self {
            id: Uuid::new_v4(),
            inner: RwLock::new(EngineState {
                state: NavigatorState::new(sequence),
                epoch: 0,
                version: 0,
            }),
            subscribers: RwLock::new(Vec::new()),
            delivered: ReentrantMutex::new(Cell::new(0)),
            autoplay: None,
            timer: Mutex::new(None),
        }
    }

    /// Create an engine from raw frames
    pub fn from_frames(frames: Vec<T>) -> Result<Self, NavigatorError> {
        Sequence::new(frames).map(Self::new)
    }

    /// Enable autoplay; timers are spawned on `runtime`
    pub fn with_autoplay(mut self, policy: AutoplayPolicy, runtime: Handle) -> Self {
        self.autoplay = Some(Autoplay { policy, runtime });
        self
    }

    pub fn id(&self) -> NavigatorId {
        self.id
    }

    pub fn has_autoplay(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Copy of the current state; later transitions do not affect it
    pub fn snapshot(&self) -> NavigatorState<T> {
        self.inner.read().state.clone()
    }

    pub fn current(&self) -> T
    where
        T: Clone,
    {
        self.inner.read().state.current().clone()
    }

    pub fn position(&self) -> StepPosition {
        self.inner.read().state.position()
    }

    pub fn is_playing(&self) -> bool {
        self.inner.read().state.is_playing()
    }

    /// Navigate forward by one step
    pub fn advance(&self) -> NavigatorState<T> {
        self.manual(NavigationChange::Advanced, NavigatorState::advance)
    }

    /// Navigate backward by one step
    pub fn retreat(&self) -> NavigatorState<T> {
        self.manual(NavigationChange::Retreated, NavigatorState::retreat)
    }

    /// Return to the first frame
    pub fn reset(&self) -> NavigatorState<T> {
        self.manual(NavigationChange::Reset, NavigatorState::reset)
    }

    /// Jump to a frame, clamped to the last one
    pub fn seek(&self, index: usize) -> NavigatorState<T> {
        self.manual(NavigationChange::Seeked, |state| state.seek(index))
    }

    pub fn skip_to_end(&self) -> NavigatorState<T> {
        self.manual(NavigationChange::Seeked, NavigatorState::skip_to_end)
    }

    /// Replace the content, e.g. when switching to an error-path variant
    ///
    /// An empty `frames` is rejected before anything changes, including any
    /// running autoplay.
    pub fn set_sequence(&self, frames: Vec<T>) -> Result<NavigatorState<T>, NavigatorError> {
        let sequence = Sequence::new(frames)?;
        Ok(self.replace_sequence(sequence))
    }

    /// Replace the content with an already validated sequence
    pub fn replace_sequence(&self, sequence: Sequence<T>) -> NavigatorState<T> {
        self.manual(NavigationChange::SequenceReplaced, move |state| {
            state.with_sequence(sequence)
        })
    }

    /// Start or pause autoplay, returning whether the engine is now playing
    ///
    /// Without an autoplay policy this does nothing. Starting on the last
    /// frame settles straight back to idle.
    pub fn toggle_playing(self: &Arc<Self>) -> bool {
        let Some(autoplay) = &self.autoplay else {
            debug!(navigator = %self.id, "autoplay not configured, ignoring toggle");
            return false;
        };

        let mut inner = self.inner.write();
        if inner.state.is_playing() {
            self.cancel_autoplay(&mut inner);
            info!(navigator = %self.id, cursor = inner.state.cursor(), "autoplay paused");
            let context = self.commit(&mut inner, NavigationChange::PlaybackStopped);
            drop(inner);
            self.notify_subscribers(&context);
            return false;
        }

        let next = inner.state.toggle_playing();
        if !next.is_playing() {
            debug!(navigator = %self.id, "already on the last frame, autoplay not started");
            return false;
        }

        inner.epoch += 1;
        let epoch = inner.epoch;
        inner.state = next;

        let engine = Arc::downgrade(self);
        let timer = AutoplayTimer::spawn(&autoplay.runtime, autoplay.policy, epoch, move || {
            engine
                .upgrade()
                .map_or(false, |engine| engine.apply_tick(epoch))
        });
        // Replacing the slot drops any stale timer, which aborts it
        *self.timer.lock() = Some(timer);

        info!(
            navigator = %self.id,
            cursor = inner.state.cursor(),
            interval_ms = autoplay.policy.interval().as_millis() as u64,
            "autoplay started"
        );
        let context = self.commit(&mut inner, NavigationChange::PlaybackStarted);
        drop(inner);
        self.notify_subscribers(&context);
        true
    }

    /// Cancel autoplay if it is running
    pub fn stop(&self) {
        let mut inner = self.inner.write();
        if !self.cancel_autoplay(&mut inner) {
            return;
        }
        info!(navigator = %self.id, cursor = inner.state.cursor(), "autoplay stopped");
        let context = self.commit(&mut inner, NavigationChange::PlaybackStopped);
        drop(inner);
        self.notify_subscribers(&context);
    }

    /// Add a subscriber; it is held weakly and dropped once its owner goes away
    pub fn add_subscriber(&self, subscriber: Arc<dyn NavigationSubscriber<T>>) {
        let mut subscribers = self.subscribers.write();
        subscribers.push(Arc::downgrade(&subscriber));
    }

    /// Apply a manual transition
    ///
    /// Manual interaction always cancels autoplay before the transition runs.
    fn manual<F>(&self, change: NavigationChange, transition: F) -> NavigatorState<T>
    where
        F: FnOnce(&NavigatorState<T>) -> NavigatorState<T>,
    {
        let mut inner = self.inner.write();
        let cancelled = self.cancel_autoplay(&mut inner);
        let next = transition(&inner.state);

        let change = if !next.same_as(&inner.state) {
            debug!(
                navigator = %self.id,
                ?change,
                from = inner.state.cursor(),
                to = next.cursor(),
                "navigation"
            );
            change
        } else if cancelled {
            NavigationChange::PlaybackStopped
        } else {
            trace!(navigator = %self.id, ?change, "navigation no-op at boundary");
            return next;
        };

        if cancelled {
            info!(navigator = %self.id, "autoplay cancelled by manual navigation");
        }

        inner.state = next.clone();
        let context = self.commit(&mut inner, change);
        drop(inner);
        self.notify_subscribers(&context);
        next
    }

    /// Advance one frame on behalf of the autoplay timer
    ///
    /// Returns whether the timer should keep running.
    fn apply_tick(&self, epoch: u64) -> bool {
        let mut inner = self.inner.write();
        if inner.epoch != epoch || !inner.state.is_playing() {
            trace!(navigator = %self.id, epoch, "stale autoplay tick ignored");
            return false;
        }

        let next = inner.state.tick();
        let still_playing = next.is_playing();
        trace!(navigator = %self.id, cursor = next.cursor(), "autoplay tick");
        inner.state = next;
        let context = self.commit(&mut inner, NavigationChange::Ticked);
        drop(inner);

        if !still_playing {
            info!(navigator = %self.id, "autoplay reached the last frame");
            let mut slot = self.timer.lock();
            if slot.as_ref().map(AutoplayTimer::epoch) == Some(epoch) {
                slot.take();
            }
        }

        self.notify_subscribers(&context);
        still_playing
    }

    /// Stop playback and drop the timer; returns whether playback was on
    fn cancel_autoplay(&self, inner: &mut EngineState<T>) -> bool {
        let timer = self.timer.lock().take();
        inner.epoch += 1;
        let was_playing = inner.state.is_playing();
        if was_playing {
            inner.state = inner.state.stopped();
        }
        drop(timer);
        was_playing
    }

    /// Stamp the state just written with a new version
    fn commit(&self, inner: &mut EngineState<T>, change: NavigationChange) -> NavigationContext<T> {
        inner.version += 1;
        NavigationContext {
            navigator: self.id,
            change,
            state: inner.state.clone(),
            version: inner.version,
        }
    }

    /// Notify all subscribers of a navigation change
    ///
    /// Must be called without the state lock held.
    fn notify_subscribers(&self, context: &NavigationContext<T>) {
        let delivered = self.delivered.lock();
        if context.version <= delivered.get() {
            trace!(
                navigator = %self.id,
                change = ?context.change,
                version = context.version,
                "superseded notification dropped"
            );
            return;
        }
        delivered.set(context.version);

        let live: Vec<Arc<dyn NavigationSubscriber<T>>> = {
            let mut subscribers = self.subscribers.write();

            // Remove any dead weak references
            subscribers.retain(|weak| weak.strong_count() > 0);
            subscribers.iter().filter_map(Weak::upgrade).collect()
        };

        for subscriber in live {
            subscriber.on_navigation_change(context);
        }
    }
}

impl<T> Drop for NavigationEngine<T> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.get_mut().take() {
            trace!(navigator = %self.id, epoch = timer.epoch(), "cancelling autoplay on drop");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex as TestMutex;
    use std::time::Duration;

    /// Records every notification it receives
    #[derive(Default)]
    struct Recorder {
        seen: TestMutex<Vec<(NavigationChange, usize, bool)>>,
    }

    impl Recorder {
        fn changes(&self) -> Vec<NavigationChange> {
            self.seen.lock().iter().map(|(change, _, _)| *change).collect()
        }

        fn len(&self) -> usize {
            self.seen.lock().len()
        }
    }

    impl NavigationSubscriber<u32> for Recorder {
        fn on_navigation_change(&self, context: &NavigationContext<u32>) {
            self.seen.lock().push((
                context.change,
                context.state.cursor(),
                context.state.is_playing(),
            ));
        }
    }

    fn frames(count: u32) -> Vec<u32> {
        (0..count).collect()
    }

    fn engine(count: u32) -> Arc<NavigationEngine<u32>> {
        Arc::new(NavigationEngine::from_frames(frames(count)).unwrap())
    }

    fn autoplay_engine(count: u32) -> Arc<NavigationEngine<u32>> {
        let policy = AutoplayPolicy::new(Duration::from_millis(100)).unwrap();
        Arc::new(
            NavigationEngine::from_frames(frames(count))
                .unwrap()
                .with_autoplay(policy, Handle::current()),
        )
    }

    #[test]
    fn test_empty_frames_rejected() {
        assert!(matches!(
            NavigationEngine::<u32>::from_frames(Vec::new()),
            Err(NavigatorError::InvalidSequence)
        ));
    }

    #[test]
    fn test_manual_navigation_notifies_on_change_only() {
        let engine = engine(3);
        let recorder = Arc::new(Recorder::default());
        engine.add_subscriber(recorder.clone());

        engine.retreat();
        assert_eq!(recorder.len(), 0);

        engine.advance();
        engine.advance();
        engine.advance();
        assert_eq!(engine.position().index, 2);
        assert_eq!(
            recorder.changes(),
            vec![NavigationChange::Advanced, NavigationChange::Advanced]
        );

        engine.reset();
        engine.reset();
        assert_eq!(recorder.len(), 3);
        assert_eq!(engine.current(), 0);
    }

    #[test]
    fn test_set_sequence_swaps_content() {
        let engine = engine(5);
        engine.seek(4);

        let state = engine.set_sequence(vec![10, 11]).unwrap();
        assert_eq!(state.cursor(), 0);
        assert_eq!(engine.current(), 10);

        assert_eq!(engine.set_sequence(Vec::new()), Err(NavigatorError::InvalidSequence));
        assert_eq!(engine.current(), 10);
        assert_eq!(engine.position().total, 2);
    }

    #[test]
    fn test_snapshot_is_not_affected_by_later_transitions() {
        let engine = engine(4);
        let before = engine.snapshot();
        engine.advance();
        assert_eq!(before.cursor(), 0);
        assert_eq!(engine.snapshot().cursor(), 1);
    }

    #[test]
    fn test_dead_subscribers_are_pruned() {
        let engine = engine(3);
        let kept = Arc::new(Recorder::default());
        engine.add_subscriber(kept.clone());
        {
            let dropped = Arc::new(Recorder::default());
            engine.add_subscriber(dropped);
        }
        engine.advance();
        assert_eq!(engine.subscribers.read().len(), 1);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_closure_subscriber() {
        let engine = engine(3);
        let count = Arc::new(TestMutex::new(0usize));
        let counter = Arc::clone(&count);
        let subscriber: Arc<dyn NavigationSubscriber<u32>> =
            Arc::new(move |_: &NavigationContext<u32>| *counter.lock() += 1);
        engine.add_subscriber(Arc::clone(&subscriber));

        engine.skip_to_end();
        engine.advance();
        assert_eq!(*count.lock(), 1);
    }

    #[test]
    fn test_toggle_without_autoplay_is_noop() {
        let engine = engine(3);
        assert!(!engine.toggle_playing());
        assert!(!engine.is_playing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_autoplay_runs_to_last_frame() {
        let engine = autoplay_engine(4);
        let recorder = Arc::new(Recorder::default());
        engine.add_subscriber(recorder.clone());

        assert!(engine.toggle_playing());
        assert!(engine.is_playing());

        tokio::time::sleep(Duration::from_millis(350)).await;
        assert_eq!(engine.position().index, 3);
        assert!(!engine.is_playing());
        assert!(engine.timer.lock().is_none());

        assert_eq!(
            recorder.changes(),
            vec![
                NavigationChange::PlaybackStarted,
                NavigationChange::Ticked,
                NavigationChange::Ticked,
                NavigationChange::Ticked,
            ]
        );

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(recorder.len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_navigation_cancels_autoplay() {
        let engine = autoplay_engine(6);
        engine.toggle_playing();

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(engine.position().index, 1);

        let state = engine.advance();
        assert_eq!(state.cursor(), 2);
        assert!(!state.is_playing());
        assert!(engine.timer.lock().is_none());

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(engine.position().index, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_boundary_noop_still_cancels_autoplay() {
        let engine = autoplay_engine(4);
        let recorder = Arc::new(Recorder::default());
        engine.add_subscriber(recorder.clone());
        engine.toggle_playing();

        engine.retreat();
        assert!(!engine.is_playing());
        assert_eq!(
            recorder.changes(),
            vec![NavigationChange::PlaybackStarted, NavigationChange::PlaybackStopped]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_pauses_and_resumes() {
        let engine = autoplay_engine(5);
        assert!(engine.toggle_playing());
        tokio::time::sleep(Duration::from_millis(150)).await;

        assert!(!engine.toggle_playing());
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(engine.position().index, 1);

        assert!(engine.toggle_playing());
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(engine.position().index, 4);
        assert!(!engine.is_playing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_on_last_frame_does_not_start_timer() {
        let engine = autoplay_engine(3);
        engine.skip_to_end();
        assert!(!engine.toggle_playing());
        assert!(engine.timer.lock().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_swap_leaves_autoplay_running() {
        let engine = autoplay_engine(5);
        engine.toggle_playing();
        assert!(engine.set_sequence(Vec::new()).is_err());
        assert!(engine.is_playing());

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(engine.position().index, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sequence_swap_cancels_autoplay() {
        let engine = autoplay_engine(5);
        engine.toggle_playing();
        tokio::time::sleep(Duration::from_millis(150)).await;

        engine.set_sequence(vec![7, 8, 9]).unwrap();
        assert!(!engine.is_playing());
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(engine.position().index, 0);
        assert_eq!(engine.current(), 7);
    }

    #[test]
    fn test_superseded_notification_is_dropped() {
        let engine = engine(4);
        let recorder = Arc::new(Recorder::default());
        engine.add_subscriber(recorder.clone());

        let (older, newer) = {
            let mut inner = engine.inner.write();
            inner.state = inner.state.advance();
            let older = engine.commit(&mut inner, NavigationChange::Advanced);
            inner.state = inner.state.advance();
            let newer = engine.commit(&mut inner, NavigationChange::Advanced);
            (older, newer)
        };
        assert!(older.version < newer.version);

        engine.notify_subscribers(&newer);
        engine.notify_subscribers(&older);
        assert_eq!(*recorder.seen.lock(), vec![(NavigationChange::Advanced, 2, false)]);
    }

    #[test]
    fn test_subscriber_may_navigate_from_callback() {
        let engine = engine(4);
        let weak = Arc::downgrade(&engine);
        let bounce: Arc<dyn NavigationSubscriber<u32>> =
            Arc::new(move |context: &NavigationContext<u32>| {
                if context.state.cursor() == 1 {
                    if let Some(engine) = weak.upgrade() {
                        engine.advance();
                    }
                }
            });
        engine.add_subscriber(Arc::clone(&bounce));

        engine.advance();
        assert_eq!(engine.position().index, 2);
    }

    /// Sleeps inside every tick notification, like a slow renderer
    #[derive(Default)]
    struct SlowOnTick {
        seen: TestMutex<Vec<(NavigationChange, usize, bool)>>,
    }

    impl NavigationSubscriber<u32> for SlowOnTick {
        fn on_navigation_change(&self, context: &NavigationContext<u32>) {
            if context.change == NavigationChange::Ticked {
                std::thread::sleep(Duration::from_millis(300));
            }
            self.seen.lock().push((
                context.change,
                context.state.cursor(),
                context.state.is_playing(),
            ));
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_manual_call_during_slow_tick_delivery_keeps_order() {
        let policy = AutoplayPolicy::new(Duration::from_millis(20)).unwrap();
        let engine = Arc::new(
            NavigationEngine::from_frames(frames(10))
                .unwrap()
                .with_autoplay(policy, Handle::current()),
        );
        let slow = Arc::new(SlowOnTick::default());
        engine.add_subscriber(slow.clone());

        assert!(engine.toggle_playing());
        // First tick lands at 20ms and its delivery sleeps until ~320ms
        tokio::time::sleep(Duration::from_millis(120)).await;

        let manual = Arc::clone(&engine);
        let state = tokio::task::spawn_blocking(move || manual.advance())
            .await
            .unwrap();
        assert_eq!(state.cursor(), 2);
        assert!(!state.is_playing());

        // The manual change is delivered after the tick already in flight
        assert_eq!(
            *slow.seen.lock(),
            vec![
                (NavigationChange::PlaybackStarted, 0, true),
                (NavigationChange::Ticked, 1, true),
                (NavigationChange::Advanced, 2, false),
            ]
        );

        tokio::time::sleep(Duration::from_millis(500)).await;
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.cursor(), 2);
        assert!(!snapshot.is_playing());
        assert_eq!(
            slow.seen.lock().last().copied(),
            Some((NavigationChange::Advanced, 2, false))
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_last_notification_matches_engine_under_contention() {
        let policy = AutoplayPolicy::new(Duration::from_millis(5)).unwrap();
        let engine = Arc::new(
            NavigationEngine::from_frames(frames(200))
                .unwrap()
                .with_autoplay(policy, Handle::current()),
        );
        let recorder = Arc::new(Recorder::default());
        engine.add_subscriber(recorder.clone());

        for _ in 0..10 {
            engine.toggle_playing();
            tokio::time::sleep(Duration::from_millis(12)).await;
            let manual = Arc::clone(&engine);
            tokio::task::spawn_blocking(move || manual.advance())
                .await
                .unwrap();
        }
        tokio::time::sleep(Duration::from_millis(50)).await;

        let snapshot = engine.snapshot();
        let last = recorder.seen.lock().last().copied();
        assert_eq!(last, Some((NavigationChange::Advanced, snapshot.cursor(), false)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_engine_cancels_timer() {
        let engine = autoplay_engine(10);
        let recorder = Arc::new(Recorder::default());
        engine.add_subscriber(recorder.clone());
        engine.toggle_playing();

        tokio::time::sleep(Duration::from_millis(150)).await;
        let seen = recorder.len();
        drop(engine);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(recorder.len(), seen);
    }
}
