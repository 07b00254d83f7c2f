
use std::{fs, path::Path};

use example_layer::ExampleLayer;
use layer_reconcile::{
    EditOperation, Fragment, FragmentRegistry, FragmentStore, Location, Mirrored, apply_patches,
    compute_hints, reconcile_layer,
};
use pretty_assertions::assert_eq;
use serde::Deserialize;

#[test]
fn test_example_hints() {
    for example in &get_all_examples() {
        let operations = EditOperation::diff(example.old_text(), example.new_text());
        example.assert_hints(&compute_hints(&example.locations(), &operations));
    }
}

#[test]
fn test_example_reconciliation() {
    for example in &get_all_examples() {
        let mut layer = example.layer();
        let hints = reconcile_layer(&mut layer, example.old_text(), example.new_text());

        example.assert_hints(&hints);
        example.assert_patched(layer.locations());
    }
}

#[test]
fn test_example_reconciliation_of_decoded_layers() {
    let mut registry = FragmentRegistry::new();
    registry.register::<Annotation>("fr.annotation");

    for example in &get_all_examples() {
        let mut store = registry
            .decode_layer("fr.annotation", &example.layer())
            .expect("Failed to decode example layer");

        let hints = reconcile_layer(&mut store, example.old_text(), example.new_text());

        example.assert_hints(&hints);
        example.assert_patched(&store.locations());
    }
}

#[test]
fn test_example_patches_in_lockstep() {
    for example in &get_all_examples() {
        let mut generic = example.layer();
        let mut typed: FragmentStore<Annotation> = example
            .locations()
            .into_iter()
            .map(|location| Annotation { location })
            .collect();

        let patches: Vec<String> = typed
            .hints(&EditOperation::diff(example.old_text(), example.new_text()))
            .iter()
            .filter_map(|hint| hint.patch.filter(|patch| patch.source() == hint.location))
            .map(|patch| patch.to_string())
            .collect();

        let mut mirrored = Mirrored::new(&mut typed, &mut generic).expect("Layers out of sync");
        apply_patches(&mut mirrored, &patches);

        example.assert_patched(generic.locations());
        assert_eq!(typed.locations(), generic.locations(), "{}", example.name());
    }
}

#[derive(Debug, Deserialize)]
struct Annotation {
    location: Location,
}

impl Fragment for Annotation {
    fn location(&self) -> Location { self.location }

    fn set_location(&mut self, location: Location) { self.location = location; }
}

fn get_all_examples() -> Vec<ExampleLayer> {
    let examples_dir = Path::new("tests/examples");
    let entries = fs::read_dir(examples_dir)
        .expect("Failed to read examples directory")
        .collect::<Vec<_>>();

    let mut examples = Vec::new();

    for entry in entries {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();

        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("yml") {
            let file = fs::File::open(&path).expect("Failed to open example file");
            for document in serde_yaml::Deserializer::from_reader(file) {
                let example =
                    ExampleLayer::deserialize(document).expect("Failed to deserialize example");
                examples.push(example);
            }
        }
    }

    assert!(!examples.is_empty(), "No examples found");
    examples
}
