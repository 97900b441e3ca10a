use super::*;
use crate::instance::InstanceDescriptor;
use crate::software::render_scene;
use blockshade_common::Color;
use blockshade_config::BlockshadeConfig;

const FULL_SCENE: &str = r##"
[camera]
left = 0.0
right = 200.0
bottom = 100.0
top = 0.0

[sprite]
size = 16.0

[[sprites]]
offset = [20.0, 20.0]

[[quads]]
offset = [0.0, 0.0]
size = [10.0, 10.0]
color = "#ff0000"

[[quads]]
offset = [50.0, 0.0]
size = [20.0, 5.0]
color = "rgba(0, 255, 0, 0.5)"

[[quads]]
offset = [30.0, 30.0]
size = [10.0, 10.0]
color = "#0000ff"

[[tiles]]
offset = [60.0, 60.0]
color = "#808080"

[[panels]]
position = [100.0, 10.0]
size = [50.0, 20.0]
fill = "#202020"
border = "#ffffff"
border_size = 2.0

[[triangles]]
vertices = [
    { position = [-1.0, -1.0], color = "#ff0000" },
    { position = [1.0, -1.0], color = "#00ff00" },
    { position = [0.0, 1.0], color = "#0000ff" },
]
"##;

fn small_config(width: u32, height: u32) -> BlockshadeConfig {
    let mut config = BlockshadeConfig::default();
    config.render.width = width;
    config.render.height = height;
    config.render.clear_color = "#000000".into();
    config
}

#[test]
fn parse_full_scene() {
    let scene = Scene::from_toml_str(FULL_SCENE).unwrap();
    assert_eq!(scene.sprites.len(), 1);
    assert_eq!(scene.quads.len(), 3);
    assert_eq!(scene.tiles.len(), 1);
    assert_eq!(scene.panels.len(), 1);
    assert_eq!(scene.triangles[0].vertices.len(), 3);
    assert_eq!(scene.sprite.size, 16.0);
    assert_eq!(
        scene.camera,
        Some(SceneCamera {
            left: 0.0,
            right: 200.0,
            bottom: 100.0,
            top: 0.0
        })
    );
}

#[test]
fn empty_scene_uses_defaults() {
    let scene = Scene::from_toml_str("").unwrap();
    assert!(scene.camera.is_none());
    assert_eq!(scene.sprite.size, DEFAULT_SPRITE_SIZE);
    let batches = scene.batches().unwrap();
    assert!(batches.is_empty());
    assert!(batches.sprites.is_none());
}

#[test]
fn panel_defaults() {
    let scene = Scene::from_toml_str(
        r#"
[[panels]]
position = [0.0, 0.0]
size = [10.0, 10.0]
"#,
    )
    .unwrap();
    let panel = &scene.batches().unwrap().panels[0];
    assert_eq!(panel.fill_color.a, 0.0);
    assert_eq!(panel.border_color, Color::WHITE);
    assert_eq!(panel.border_size, 1.0);
}

#[test]
fn batches_group_quads_by_size() {
    let batches = Scene::from_toml_str(FULL_SCENE).unwrap().batches().unwrap();
    assert_eq!(batches.quads.len(), 2);
    assert_eq!(batches.quads[0].size, [10.0, 10.0]);
    assert_eq!(batches.quads[0].instances.len(), 2);
    assert_eq!(batches.quads[1].size, [20.0, 5.0]);
    assert!((batches.quads[1].instances[0].color.a - 0.5).abs() < 1e-6);
    assert_eq!(batches.instance_count(), 1 + 3 + 1 + 1 + 1);
}

#[test]
fn instances_are_tagged_in_draw_order() {
    let batches = Scene::from_toml_str(FULL_SCENE).unwrap().batches().unwrap();
    let kinds: Vec<BatchKind> = batches.instances().map(|(kind, _)| kind).collect();
    assert_eq!(
        kinds,
        vec![
            BatchKind::Sprites,
            BatchKind::Quads,
            BatchKind::Quads,
            BatchKind::Quads,
            BatchKind::Tiles,
            BatchKind::Panels,
        ]
    );
    let (_, panel) = batches.instances().last().unwrap();
    assert!(matches!(panel, InstanceDescriptor::SizedColored(p) if p.border_size == 2.0));
    // One sprite, three quads and a tile, then one panel.
    assert_eq!(batches.instance_bytes(), 8 + 3 * 24 + 24 + 52);
}

#[test]
fn batches_resolve_camera_and_sprites() {
    let batches = Scene::from_toml_str(FULL_SCENE).unwrap().batches().unwrap();
    let camera = batches.camera.unwrap();
    assert_eq!(camera, crate::camera::CameraUniform::ortho_bounds(0.0, 200.0, 100.0, 0.0));
    let sprites = batches.sprites.unwrap();
    assert_eq!(sprites.size, 16.0);
    assert_eq!(sprites.instances[0].offset, [20.0, 20.0]);
    assert_eq!(sprites.texture.width(), 8);
}

#[test]
fn invalid_color_names_the_field() {
    let scene = Scene::from_toml_str(
        r##"
[[tiles]]
offset = [0.0, 0.0]
color = "#00ff00"

[[tiles]]
offset = [0.0, 0.0]
color = "chartreuse"
"##,
    )
    .unwrap();
    match scene.batches() {
        Err(SceneError::InvalidColor { field, value }) => {
            assert_eq!(field, "tiles[1].color");
            assert_eq!(value, "chartreuse");
        }
        other => panic!("expected InvalidColor, got {other:?}"),
    }
}

#[test]
fn incomplete_triangle_is_rejected() {
    let scene = Scene::from_toml_str(
        r##"
[[triangles]]
vertices = [
    { position = [0.0, 0.0], color = "#ffffff" },
    { position = [1.0, 0.0], color = "#ffffff" },
]
"##,
    )
    .unwrap();
    assert!(matches!(
        scene.batches(),
        Err(SceneError::IncompleteTriangle(2))
    ));
}

#[test]
fn malformed_toml_is_parse_error() {
    let err = Scene::from_toml_str("[[quads]\noffset = 1").unwrap_err();
    assert!(matches!(err, SceneError::Parse(_)));
}

#[test]
fn missing_quad_field_is_parse_error() {
    let err = Scene::from_toml_str("[[quads]]\noffset = [0.0, 0.0]\ncolor = \"#fff\"").unwrap_err();
    assert!(err.to_string().contains("size"));
}

#[test]
fn load_resolves_texture_next_to_scene() {
    let dir = tempfile::tempdir().unwrap();
    let mut img = image::RgbaImage::new(2, 2);
    img.put_pixel(0, 0, image::Rgba([10, 20, 30, 255]));
    img.save(dir.path().join("tile.png")).unwrap();

    let scene_path = dir.path().join("scene.toml");
    std::fs::write(
        &scene_path,
        "[sprite]\ntexture = \"tile.png\"\n\n[[sprites]]\noffset = [0.0, 0.0]\n",
    )
    .unwrap();

    let scene = Scene::load(&scene_path).unwrap();
    assert_eq!(scene.base_dir.as_deref(), Some(dir.path()));
    let sprites = scene.batches().unwrap().sprites.unwrap();
    assert_eq!(sprites.texture.width(), 2);
    assert_eq!(sprites.texture.texel(0, 0), Color::from_rgba8(10, 20, 30, 255));
}

#[test]
fn missing_texture_is_texture_error() {
    let scene = Scene::from_toml_str(
        "[sprite]\ntexture = \"/nonexistent/tile.png\"\n\n[[sprites]]\noffset = [0.0, 0.0]\n",
    )
    .unwrap();
    assert!(matches!(scene.batches(), Err(SceneError::Texture(_))));
}

#[test]
fn missing_scene_file_is_parse_error() {
    let err = Scene::load(Path::new("/nonexistent/scene.toml")).unwrap_err();
    assert!(matches!(err, SceneError::Parse(_)));
}

#[test]
fn draw_order_is_back_to_front() {
    // Every batch covers pixel (5, 5); the panel is drawn last.
    let scene = Scene::from_toml_str(
        r##"
[[triangles]]
vertices = [
    { position = [-1.0, 1.0], color = "#ff0000" },
    { position = [1.0, 1.0], color = "#ff0000" },
    { position = [-1.0, -1.0], color = "#ff0000" },
]

[[quads]]
offset = [0.0, 0.0]
size = [34.0, 8.0]
color = "#00ff00"

[[tiles]]
offset = [0.0, 0.0]
color = "#0000ff"

[[panels]]
position = [4.0, 4.0]
size = [4.0, 4.0]
fill = "#ffff00"
border = "#ffff00"
"##,
    )
    .unwrap();
    let batches = scene.batches().unwrap();
    let config = small_config(40, 40);
    let fb = render_scene(&batches, &config);

    let rgba = |x, y| fb.get(x, y).map(Color::to_rgba8);

    // Panel on top of everything.
    assert_eq!(rgba(5, 5), Some([255, 255, 0, 255]));
    // Tile over the quad; the middle region keeps the tint.
    assert_eq!(rgba(15, 15), Some([0, 0, 255, 255]));
    // Quad over the triangle, right of the tile.
    assert_eq!(rgba(33, 4), Some([0, 255, 0, 255]));
    // Triangle alone, right of the quad.
    assert_eq!(rgba(35, 2), Some([255, 0, 0, 255]));
    assert_eq!(rgba(38, 38), Some([0, 0, 0, 255]));
}

#[test]
fn quad_draws_over_triangle() {
    let scene = Scene::from_toml_str(
        r##"
[[triangles]]
vertices = [
    { position = [-1.0, 1.0], color = "#ff0000" },
    { position = [1.0, 1.0], color = "#ff0000" },
    { position = [-1.0, -1.0], color = "#ff0000" },
]

[[quads]]
offset = [0.0, 0.0]
size = [4.0, 4.0]
color = "#00ff00"
"##,
    )
    .unwrap();
    let fb = render_scene(&scene.batches().unwrap(), &small_config(16, 16));
    assert_eq!(fb.get(1, 1), Some(Color::rgb(0.0, 1.0, 0.0)));
    assert_eq!(fb.get(8, 1).map(Color::to_rgba8), Some([255, 0, 0, 255]));
}

#[test]
fn max_instances_truncates_batches() {
    let scene = Scene::from_toml_str(
        r##"
[[tiles]]
offset = [0.0, 0.0]
color = "#ffffff"

[[tiles]]
offset = [30.0, 0.0]
color = "#ffffff"
"##,
    )
    .unwrap();
    let mut config = small_config(60, 30);
    config.render.max_instances = 1;
    let fb = render_scene(&scene.batches().unwrap(), &config);
    assert_ne!(fb.get(15, 15), Some(Color::BLACK));
    assert_eq!(fb.get(45, 15), Some(Color::BLACK));
}
