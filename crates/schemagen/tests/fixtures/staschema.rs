// @generated by schemagen from schema definitions. Do not edit.

use std::ops::{Deref, DerefMut};
use std::rc::Rc;

/// Every generated record type, in declaration order
pub const RECORD_TYPES: &[&str] = &[
    "ScenarioScenario",
    "ScenarioParticipant",
    "ScenarioSpacecraft",
    "ScenarioTimeline",
];

/// Root of every generated record type
#[derive(Debug, Clone, Default)]
pub struct ScenarioObject;

#[derive(Debug, Clone, Default)]
pub struct ScenarioScenario {
    base: ScenarioObject,
    name: String,
    epoch: schemagen_dom::Timestamp,
    participant: Vec<Rc<ScenarioParticipant>>,
    spacecraft: Vec<Rc<ScenarioSpacecraft>>,
    timeline: Option<Rc<ScenarioTimeline>>,
}

impl ScenarioScenario {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn epoch(&self) -> schemagen_dom::Timestamp {
        self.epoch
    }

    pub fn set_epoch(&mut self, epoch: schemagen_dom::Timestamp) {
        self.epoch = epoch;
    }

    pub fn participant(&self) -> &Vec<Rc<ScenarioParticipant>> {
        &self.participant
    }

    pub fn participant_mut(&mut self) -> &mut Vec<Rc<ScenarioParticipant>> {
        &mut self.participant
    }

    pub fn set_participant(&mut self, participant: Vec<Rc<ScenarioParticipant>>) {
        self.participant = participant;
    }

    pub fn spacecraft(&self) -> &Vec<Rc<ScenarioSpacecraft>> {
        &self.spacecraft
    }

    pub fn spacecraft_mut(&mut self) -> &mut Vec<Rc<ScenarioSpacecraft>> {
        &mut self.spacecraft
    }

    pub fn set_spacecraft(&mut self, spacecraft: Vec<Rc<ScenarioSpacecraft>>) {
        self.spacecraft = spacecraft;
    }

    pub fn timeline(&self) -> Option<&Rc<ScenarioTimeline>> {
        self.timeline.as_ref()
    }

    pub fn set_timeline(&mut self, timeline: Option<Rc<ScenarioTimeline>>) {
        self.timeline = timeline;
    }
}

impl Deref for ScenarioScenario {
    type Target = ScenarioObject;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl DerefMut for ScenarioScenario {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScenarioParticipant {
    base: ScenarioObject,
    name: String,
    tag: Vec<String>,
}

impl ScenarioParticipant {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn tag(&self) -> &Vec<String> {
        &self.tag
    }

    pub fn tag_mut(&mut self) -> &mut Vec<String> {
        &mut self.tag
    }

    pub fn set_tag(&mut self, tag: Vec<String>) {
        self.tag = tag;
    }
}

impl Deref for ScenarioParticipant {
    type Target = ScenarioObject;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl DerefMut for ScenarioParticipant {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScenarioSpacecraft {
    base: ScenarioParticipant,
    mass: f64,
    visible: bool,
    position: Vec<f64>,
    r#type: String,
    count: i32,
}

impl ScenarioSpacecraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn set_mass(&mut self, mass: f64) {
        self.mass = mass;
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn position(&self) -> &Vec<f64> {
        &self.position
    }

    pub fn position_mut(&mut self) -> &mut Vec<f64> {
        &mut self.position
    }

    pub fn set_position(&mut self, position: Vec<f64>) {
        self.position = position;
    }

    pub fn r#type(&self) -> &str {
        &self.r#type
    }

    pub fn set_type(&mut self, r#type: String) {
        self.r#type = r#type;
    }

    pub fn count(&self) -> i32 {
        self.count
    }

    pub fn set_count(&mut self, count: i32) {
        self.count = count;
    }
}

impl Deref for ScenarioSpacecraft {
    type Target = ScenarioParticipant;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl DerefMut for ScenarioSpacecraft {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScenarioTimeline {
    base: ScenarioObject,
    start_time: schemagen_dom::Timestamp,
    steps: Vec<i32>,
}

impl ScenarioTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_time(&self) -> schemagen_dom::Timestamp {
        self.start_time
    }

    pub fn set_start_time(&mut self, start_time: schemagen_dom::Timestamp) {
        self.start_time = start_time;
    }

    pub fn steps(&self) -> &Vec<i32> {
        &self.steps
    }

    pub fn steps_mut(&mut self) -> &mut Vec<i32> {
        &mut self.steps
    }

    pub fn set_steps(&mut self, steps: Vec<i32>) {
        self.steps = steps;
    }
}

impl Deref for ScenarioTimeline {
    type Target = ScenarioObject;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl DerefMut for ScenarioTimeline {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}
