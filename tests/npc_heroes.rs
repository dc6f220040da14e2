use vdf::{parse, Error, Node};

const NPC_HEROES: &str = r#"// Dota Heroes File
"DOTAHeroes"
{
	"Version"		"1"

	//=================================================================================================================
	// HERO: Base
	//=================================================================================================================
	"npc_dota_hero_base"
	{
		"BaseClass"		"npc_dota_hero"
		"Enabled"		"0"
	}

	"npc_dota_hero_antimage"
	{
		"BaseClass"		"npc_dota_hero_antimage"
		"HeroID"		"1"		// unique ID number for this hero.  Do not change this once established or it will invalidate collected stats.
		"Enabled"		"1"
		"Role"			"Carry,Escape,Nuker"
		"Bio"			"Anti-Mage said \"no\"."
		"AttackSpeedActivityModifiers"
		{
			"fast"		"0"
			"faster"		"170"
			"fastest"		"275"
		}
		"Adjectives"
		{
			"Beard"		"1"
			"Hair"		"1"
			"Legs"		"0"
		}
		"HeroID"		"99"
	}
}
"#;

fn heroes() -> Node {
  parse(NPC_HEROES.replace('\n', "\r\n").as_bytes())
}

#[test]
fn antimage() {
  let root = heroes();
  assert!(root.is_root());
  let heroes = root.get("DOTAHeroes").unwrap();
  assert_eq!(heroes.get_int("Version"), Ok(1));

  let antimage = heroes.get("npc_dota_hero_antimage").unwrap();
  assert_eq!(antimage.get_int("HeroID"), Ok(1));
  assert_eq!(antimage.get_bool("Enabled"), Ok(true));
  assert_eq!(antimage.get_str("Bio"), Ok(r#"Anti-Mage said \"no\"."#));
  assert_eq!(
    heroes.get_sub_element(&["npc_dota_hero_base", "Enabled"]).unwrap().to_bool(),
    Ok(false)
  );

  let modifiers: Vec<(&str, i64)> = antimage
    .get("AttackSpeedActivityModifiers")
    .unwrap()
    .children()
    .iter()
    .map(|x| (x.key(), x.to_int().unwrap()))
    .collect();
  assert_eq!(modifiers, vec![("fast", 0), ("faster", 170), ("fastest", 275)]);

  let adjectives = root
    .get_sub_element_string_map(&["DOTAHeroes", "npc_dota_hero_antimage", "Adjectives"])
    .unwrap();
  assert_eq!(adjectives.len(), 3);
  assert_eq!(adjectives.get("Legs"), Some(&"0"));
}

#[test]
fn duplicates() {
  let mut root = heroes();
  let ids = |root: &Node| {
    root
      .get_sub_element(&["DOTAHeroes", "npc_dota_hero_antimage"])
      .and_then(|x| x.get_all("HeroID"))
      .map(|xs| xs.len())
  };
  assert_eq!(ids(&root), Ok(2));
  root.remove_duplicates();
  assert_eq!(ids(&root), Ok(1));
}

#[test]
fn missing_elements() {
  let root = heroes();
  assert_eq!(
    root.get_sub_element(&["DOTAHeroes", "npc_dota_hero_axe"]),
    Err(Error::PathNotFound("DOTAHeroes.npc_dota_hero_axe".to_owned()))
  );
  assert_eq!(
    root.get_sub_element(&["DOTAHeroes", "Version", "x"]),
    Err(Error::PathNotFound("DOTAHeroes.Version.x".to_owned()))
  );
}

#[test]
fn round_trip_and_json() {
  let root = heroes();
  assert_eq!(vdf::parse_str(&root.to_string()), root);

  let json = root.to_json();
  assert_eq!(json["DOTAHeroes"]["npc_dota_hero_antimage"]["HeroID"], "99");
  assert_eq!(json["DOTAHeroes"]["npc_dota_hero_base"]["Enabled"], "0");
}
