// @generated by schemagen from schema definitions. Do not edit.

impl ScenarioObject {
    pub fn load(&mut self, _e: &schemagen_dom::Element) {}
}

impl ScenarioScenario {
    pub fn load(&mut self, e: &schemagen_dom::Element) {
        self.base.load(e);
        if let Some(child) = e.first_child_named("Name") {
            self.name = schemagen_dom::parse_string(&child.text());
        }
        if let Some(child) = e.first_child_named("Epoch") {
            self.epoch = schemagen_dom::parse_date_time(&child.text());
        }
        for child in e.same_tag_run("Participant") {
            let mut value = ScenarioParticipant::new();
            value.load(child);
            self.participant.push(Rc::new(value));
        }
        for child in e.same_tag_run("Spacecraft") {
            let mut value = ScenarioSpacecraft::new();
            value.load(child);
            self.spacecraft.push(Rc::new(value));
        }
        if let Some(child) = e.first_child_named("Timeline") {
            let mut value = ScenarioTimeline::new();
            value.load(child);
            self.timeline = Some(Rc::new(value));
        }
    }
}

impl ScenarioParticipant {
    pub fn load(&mut self, e: &schemagen_dom::Element) {
        self.base.load(e);
        if let Some(child) = e.first_child_named("Name") {
            self.name = schemagen_dom::parse_string(&child.text());
        }
        for child in e.same_tag_run("Tag") {
            self.tag.push(schemagen_dom::parse_string(&child.text()));
        }
    }
}

impl ScenarioSpacecraft {
    pub fn load(&mut self, e: &schemagen_dom::Element) {
        self.base.load(e);
        if let Some(child) = e.first_child_named("Mass") {
            self.mass = schemagen_dom::parse_double(&child.text());
        }
        if let Some(child) = e.first_child_named("Visible") {
            self.visible = schemagen_dom::parse_boolean(&child.text());
        }
        if let Some(child) = e.first_child_named("Position") {
            self.position = schemagen_dom::parse_double_list(&child.text());
        }
        if let Some(child) = e.first_child_named("Type") {
            self.r#type = schemagen_dom::parse_string(&child.text());
        }
        if let Some(child) = e.first_child_named("Count") {
            self.count = schemagen_dom::parse_int(&child.text());
        }
    }
}

impl ScenarioTimeline {
    pub fn load(&mut self, e: &schemagen_dom::Element) {
        self.base.load(e);
        if let Some(child) = e.first_child_named("StartTime") {
            self.start_time = schemagen_dom::parse_date_time(&child.text());
        }
        if let Some(child) = e.first_child_named("Steps") {
            self.steps = schemagen_dom::parse_int_list(&child.text());
        }
    }
}
