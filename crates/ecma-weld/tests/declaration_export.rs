use ecma_weld::test::{mock_model, mock_node_class, mock_sprite_class};
use ecma_weld::{ClassDoc, DeclarationGenerator, DocModel, DtsExporter};
use pretty_assertions::assert_eq;
use std::fs;

#[test]
fn test_sprite_end_to_end() {
    let model = DocModel::new().class(mock_sprite_class());
    let output = DeclarationGenerator::new(&model).generate();

    assert!(output.starts_with("\ndeclare module godot {\n"));
    assert!(output.contains("\tclass Sprite extends Node2D {\n"));
    assert!(output.contains("\t\ttexture: Texture;\n"));
    assert!(output.contains("\t\tplay(name: string = \"default\"): void;\n"));
    assert!(output.contains("\t\t Plays the animation named `name`.  \n"));

    let class_start = output.find("class Sprite").unwrap();
    let texture = output.find("texture: Texture;").unwrap();
    let play = output.find("play(").unwrap();
    let class_end = output.rfind("\t}\n").unwrap();
    assert!(class_start < texture && texture < play && play < class_end);
}

#[test]
fn test_sprite_class_block() {
    let model = DocModel::new();
    let block = DeclarationGenerator::new(&model).export_class(&mock_sprite_class());

    let expected = concat!(
        "\n\t/**\n",
        "\t General-purpose sprite node.  \n",
        "\n\n",
        "\t A node that displays a 2D texture.  \n",
        "\t The texture can be a region of a larger atlas.  \n",
        "\n\t*/\n",
        "\tclass Sprite extends Node2D {\n",
        "\n",
        "\n\t\t/**\n",
        "\t\t [Texture] object to draw.  \n",
        "\n\t\t*/\n",
        "\t\ttexture: Texture;\n",
        "\n",
        "\n\t\t/**\n",
        "\t\t Plays the animation named `name`.  \n",
        "\n\t\t*/\n",
        "\t\tplay(name: string = \"default\"): void;\n",
        "\n\t}\n",
    );
    assert_eq!(block, expected);
}

#[test]
fn test_node_class_members() {
    let model = DocModel::new().class(mock_node_class());
    let output = DeclarationGenerator::new(&model).generate();

    assert!(output.contains("\tclass Node extends Object {\n"));
    assert!(output.contains("\t\tstatic readonly NOTIFICATION_ENTER_TREE: number = 10;\n"));
    assert!(output.contains("\t\tstatic readonly NOTIFICATION_EXIT_TREE: number = 11;\n"));
    assert!(output.contains("\t\tname: string;\n"));
    assert!(output.contains("\t\tadd_child(node: Node, legible_unique_name: boolean = false): void;\n"));
    assert!(output.contains("\t\tget_child_count(): number;\n"));
    assert!(output.contains("\t\t ```gdscript  \n\t\t var n = get_child_count()  \n\t\t ```  \n"));
    // brief and full descriptions are identical, so the text appears once
    assert_eq!(output.matches("Base class for all scene objects.").count(), 1);
}

#[test]
fn test_excluded_classes_absent() {
    let output = DeclarationGenerator::new(&mock_model()).generate();

    assert!(!output.contains("GlobalScope"));
    assert!(!output.contains("class int"));
    assert!(!output.contains("class Nil"));
    assert_eq!(output.matches("\tclass ").count(), 3);

    let object = output.find("class Object {").unwrap();
    let node = output.find("class Node extends").unwrap();
    let sprite = output.find("class Sprite extends").unwrap();
    assert!(object < node && node < sprite);
}

#[test]
fn test_export_writes_and_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("godot.d.ts");
    fs::write(&path, "stale content that is much longer than nothing at all").unwrap();

    let model = mock_model();
    let summary = DtsExporter::new(&path).export(&model).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, DeclarationGenerator::new(&model).generate());
    assert_eq!(summary.class_count, 3);
    assert_eq!(summary.bytes_written, written.len());
    assert_eq!(summary.path, path);
}

#[test]
fn test_export_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("types").join("nested").join("godot.d.ts");
    let model = DocModel::new().class(ClassDoc::new("Node"));

    DtsExporter::new(&path)
        .create_parent_dirs(true)
        .export(&model)
        .unwrap();
    assert!(path.exists());
}

#[test]
fn test_export_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("godot.d.ts");
    let model = DocModel::new().class(ClassDoc::new("Node"));

    let err = DtsExporter::new(&path).export(&model).unwrap_err();
    assert!(err.is_destination_unwritable());
    assert!(!path.exists());
}

#[test]
fn test_model_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    fs::write(&path, mock_model().to_json().unwrap()).unwrap();

    let model = DocModel::from_json_file(&path).unwrap();
    assert_eq!(model, mock_model());
    assert!(DocModel::from_json_file(dir.path().join("absent.json")).is_err());
}
