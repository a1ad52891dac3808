// @generated by schemagen from schema definitions. Do not edit.

use std::ops::{Deref, DerefMut};
use std::rc::Rc;

/// Every generated record type, in declaration order
pub const RECORD_TYPES: &[&str] = &[
    "ScenarioFoo",
    "ScenarioFoo2",
];

/// Root of every generated record type
#[derive(Debug, Clone, Default)]
pub struct ScenarioObject;

#[derive(Debug, Clone, Default)]
pub struct ScenarioFoo {
    base: ScenarioObject,
    name: String,
    name_2: i32,
    default_: bool,
}

impl ScenarioFoo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn name_2(&self) -> i32 {
        self.name_2
    }

    pub fn set_name_2(&mut self, name_2: i32) {
        self.name_2 = name_2;
    }

    pub fn default_(&self) -> bool {
        self.default_
    }

    pub fn set_default_(&mut self, default_: bool) {
        self.default_ = default_;
    }
}

impl Deref for ScenarioFoo {
    type Target = ScenarioObject;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl DerefMut for ScenarioFoo {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScenarioFoo2 {
    base: ScenarioFoo,
    peer: Option<Rc<ScenarioFoo>>,
}

impl ScenarioFoo2 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn peer(&self) -> Option<&Rc<ScenarioFoo>> {
        self.peer.as_ref()
    }

    pub fn set_peer(&mut self, peer: Option<Rc<ScenarioFoo>>) {
        self.peer = peer;
    }
}

impl Deref for ScenarioFoo2 {
    type Target = ScenarioFoo;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl DerefMut for ScenarioFoo2 {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}
