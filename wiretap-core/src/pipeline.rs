//! ## wiretap-core::pipeline
//! **Synchronous duplex handler chain for one channel**
//!
//! Inbound events visit handlers head to tail, outbound events tail to head.
//! Each handler returns the event to pass on; whatever leaves the last handler is
//! returned to the caller (the application for inbound, the transport for outbound).

use std::sync::Arc;

use crate::error::PipelineError;
use crate::events::{ChannelId, Direction, Event};

/// Per-pipeline context handed to every handler.
#[derive(Clone, Debug)]
pub struct ChannelContext {
    channel: ChannelId,
}

impl ChannelContext {
    pub fn new(channel: ChannelId) -> Self {
        Self { channel }
    }

    pub fn channel(&self) -> &ChannelId {
        &self.channel
    }
}

/// A stage in the pipeline.
pub trait ChannelHandler: Send + Sync {
    /// Processes `event` and returns what continues down the pipeline, or `None`
    /// when this handler consumed it.
    fn handle(&self, ctx: &ChannelContext, event: Event) -> Option<Event>;
}

struct Stage {
    name: String,
    handler: Arc<dyn ChannelHandler>,
}

pub struct Pipeline {
    ctx: ChannelContext,
    stages: Vec<Stage>,
}

impl Pipeline {
    pub fn new(channel: ChannelId) -> Self {
        Self {
            ctx: ChannelContext::new(channel),
            stages: Vec::new(),
        }
    }

    pub fn channel(&self) -> &ChannelId {
        self.ctx.channel()
    }

    /// Handler names, head first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stages.iter().map(|stage| stage.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn add_first(
        &mut self,
        name: impl Into<String>,
        handler: Arc<dyn ChannelHandler>,
    ) -> Result<&mut Self, PipelineError> {
        let stage = self.stage(name.into(), handler)?;
        self.stages.insert(0, stage);
        Ok(self)
    }

    pub fn add_last(
        &mut self,
        name: impl Into<String>,
        handler: Arc<dyn ChannelHandler>,
    ) -> Result<&mut Self, PipelineError> {
        let stage = self.stage(name.into(), handler)?;
        self.stages.push(stage);
        Ok(self)
    }

    pub fn remove(&mut self, name: &str) -> Result<Arc<dyn ChannelHandler>, PipelineError> {
        let index = self
            .stages
            .iter()
            .position(|stage| stage.name == name)
            .ok_or_else(|| PipelineError::UnknownHandler(name.to_owned()))?;
        Ok(self.stages.remove(index).handler)
    }

    /// Runs `event` through the pipeline in its direction.
    pub fn fire(&self, event: Event) -> Option<Event> {
        match event.direction() {
            Direction::Inbound => self.pass(self.stages.iter(), event),
            Direction::Outbound => self.pass(self.stages.iter().rev(), event),
        }
    }

    fn pass<'a>(&self, mut stages: impl Iterator<Item = &'a Stage>, event: Event) -> Option<Event> {
        stages.try_fold(event, |event, stage| stage.handler.handle(&self.ctx, event))
    }

    fn stage(
        &self,
        name: String,
        handler: Arc<dyn ChannelHandler>,
    ) -> Result<Stage, PipelineError> {
        if self.stages.iter().any(|stage| stage.name == name) {
            return Err(PipelineError::DuplicateName(name));
        }
        Ok(Stage { name, handler })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    /// Records the order it saw events in, tagged with its own name.
    struct Tap {
        name: &'static str,
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl ChannelHandler for Tap {
        fn handle(&self, _: &ChannelContext, event: Event) -> Option<Event> {
            self.seen
                .lock()
                .push(format!("{}:{:?}", self.name, event.direction()));
            Some(event)
        }
    }

    struct Swallow;

    impl ChannelHandler for Swallow {
        fn handle(&self, _: &ChannelContext, _: Event) -> Option<Event> {
            None
        }
    }

    fn tapped_pipeline(seen: &Arc<Mutex<Vec<String>>>) -> Pipeline {
        let mut pipeline = Pipeline::new(ChannelId::from("test"));
        for name in ["a", "b", "c"] {
            pipeline
                .add_last(
                    name,
                    Arc::new(Tap {
                        name,
                        seen: seen.clone(),
                    }),
                )
                .unwrap();
        }
        pipeline
    }

    #[test]
    fn inbound_runs_head_to_tail() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let pipeline = tapped_pipeline(&seen);
        assert!(pipeline.fire(Event::Active).is_some());
        assert_eq!(*seen.lock(), vec!["a:Inbound", "b:Inbound", "c:Inbound"]);
    }

    #[test]
    fn outbound_runs_tail_to_head() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let pipeline = tapped_pipeline(&seen);
        assert!(pipeline.fire(Event::Flush).is_some());
        assert_eq!(*seen.lock(), vec!["c:Outbound", "b:Outbound", "a:Outbound"]);
    }

    #[test]
    fn consumed_event_stops() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut pipeline = tapped_pipeline(&seen);
        pipeline.add_first("swallow", Arc::new(Swallow)).unwrap();
        assert!(pipeline.fire(Event::Registered).is_none());
        assert!(seen.lock().is_empty());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut pipeline = Pipeline::new(ChannelId::from("test"));
        pipeline.add_last("logger", Arc::new(Swallow)).unwrap();
        assert_eq!(
            pipeline.add_last("logger", Arc::new(Swallow)).err(),
            Some(PipelineError::DuplicateName("logger".into()))
        );
    }

    #[test]
    fn remove_by_name() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut pipeline = tapped_pipeline(&seen);
        pipeline.remove("b").unwrap();
        assert_eq!(pipeline.names().collect::<Vec<_>>(), vec!["a", "c"]);
        assert!(matches!(
            pipeline.remove("b"),
            Err(PipelineError::UnknownHandler(_))
        ));
    }

    #[test]
    fn empty_pipeline_passes_events_through() {
        let pipeline = Pipeline::new(ChannelId::from("test"));
        assert!(pipeline.is_empty());
        assert!(matches!(pipeline.fire(Event::Close), Some(Event::Close)));
    }
}
