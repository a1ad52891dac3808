// @generated by schemagen from schema definitions. Do not edit.

impl ScenarioObject {
    pub fn load(&mut self, _e: &schemagen_dom::Element) {}
}

impl ScenarioFoo {
    pub fn load(&mut self, e: &schemagen_dom::Element) {
        self.base.load(e);
        if let Some(child) = e.first_child_named("Name") {
            self.name = schemagen_dom::parse_string(&child.text());
        }
        if let Some(child) = e.first_child_named("name") {
            self.name_2 = schemagen_dom::parse_int(&child.text());
        }
        if let Some(child) = e.first_child_named("Default") {
            self.default_ = schemagen_dom::parse_boolean(&child.text());
        }
    }
}

impl ScenarioFoo2 {
    pub fn load(&mut self, e: &schemagen_dom::Element) {
        self.base.load(e);
        if let Some(child) = e.first_child_named("Peer") {
            let mut value = ScenarioFoo::new();
            value.load(child);
            self.peer = Some(Rc::new(value));
        }
    }
}
