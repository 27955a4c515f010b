//! Canned JSON payloads.
//!
//! Bodies are produced by serializing fixed records so the wire bytes stay
//! stable: `/slow-json` is compact, `/long-json` is pretty-printed with a
//! two-space indent.

use serde::Serialize;
use uuid::Uuid;

use super::source::ValueSource;

/// `someText` of the first `/slow-json` record.
pub const FIXED_SLOW_ID: Uuid = Uuid::from_u128(0x883e11ad_0291_44cb_908b_6e18fd9b3888);

/// Record in the `/slow-json` array.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlowRecord {
    pub id: u32,
    pub some_text: Uuid,
}

/// Build the `/slow-json` body: record 4 is fixed, records 5 through 8 carry
/// fresh random identifiers.
pub fn slow_json(source: &dyn ValueSource) -> serde_json::Result<String> {
    let mut records = Vec::with_capacity(5);
    records.push(SlowRecord {
        id: 4,
        some_text: FIXED_SLOW_ID,
    });
    for id in 5..=8 {
        records.push(SlowRecord {
            id,
            some_text: source.random_id(),
        });
    }
    serde_json::to_string(&records)
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Friend<'a> {
    pub id: u32,
    pub name: &'a str,
}

/// Record in the `/long-json` array.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person<'a> {
    #[serde(rename = "_id")]
    pub id: &'a str,
    pub index: u32,
    pub guid: &'a str,
    pub is_active: bool,
    pub balance: &'a str,
    pub picture: &'a str,
    pub age: u32,
    pub eye_color: &'a str,
    pub name: &'a str,
    pub gender: &'a str,
    pub company: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub address: &'a str,
    pub about: &'a str,
    pub registered: &'a str,
    pub latitude: f64,
    pub longitude: f64,
    pub tags: &'a [&'a str],
    pub friends: &'a [Friend<'a>],
    pub greeting: &'a str,
    pub favorite_fruit: &'a str,
}

/// Build the `/long-json` body. The first record's `_id` is the current time
/// in milliseconds; everything else is fixed.
pub fn long_json(source: &dyn ValueSource) -> serde_json::Result<String> {
    let stamp = source.now_millis().to_string();
    let mut people = PEOPLE;
    people[0].id = &stamp;
    serde_json::to_string_pretty(&people)
}

const PICTURE: &str = "http://placehold.it/32x32";

static PEOPLE: [Person<'static>; 5] = [
    Person {
        id: "",
        index: 0,
        guid: "98f9a8c0-1715-447e-b89d-842a25157b78",
        is_active: false,
        balance: "$1,627.63",
        picture: PICTURE,
        age: 37,
        eye_color: "brown",
        name: "Graham Sanchez",
        gender: "male",
        company: "GENEKOM",
        email: "grahamsanchez@genekom.com",
        phone: "+1 (931) 484-2268",
        address: "247 Borinquen Pl, Aguila, Montana, 2802",
        about: "Laborum id qui eiusmod consequat amet magna voluptate veniam id. Elit proident laboris consectetur amet. Non do mollit in cillum excepteur nostrud in. Ad exercitation non anim sint adipisicing fugiat irure sint excepteur Lorem amet nostrud quis. Cillum nisi pariatur proident nisi est do occaecat minim anim tempor duis.\r\n",
        registered: "2020-05-19T02:33:22 -02:00",
        latitude: 27.946368,
        longitude: 45.30655,
        tags: &["in", "occaecat", "est", "minim", "dolore", "magna", "occaecat"],
        friends: &[
            Friend { id: 0, name: "Dickerson Bauer" },
            Friend { id: 1, name: "Lora Oconnor" },
            Friend { id: 2, name: "Brady Knight" },
        ],
        greeting: "Hello, Graham Sanchez! You have 2 unread messages.",
        favorite_fruit: "banana",
    },
    Person {
        id: "605d04bfad0cee631b432037",
        index: 1,
        guid: "71d381be-8e0c-4ba4-9e22-a0b673b435e6",
        is_active: true,
        balance: "$3,070.42",
        picture: PICTURE,
        age: 27,
        eye_color: "green",
        name: "Dorsey Cooper",
        gender: "male",
        company: "BALUBA",
        email: "dorseycooper@baluba.com",
        phone: "+1 (906) 481-2748",
        address: "483 Coffey Street, Loveland, Missouri, 358",
        about: "Veniam sint adipisicing quis mollit anim velit sit exercitation qui ullamco cupidatat ipsum officia. Aliqua voluptate est labore dolor excepteur nulla non ullamco commodo esse reprehenderit reprehenderit ad exercitation. Amet amet irure aliquip officia. Labore incididunt cupidatat quis aliqua amet reprehenderit excepteur. Sit irure ad eiusmod duis eiusmod. Enim exercitation voluptate cillum dolor aliqua qui commodo in ea quis qui. Incididunt culpa ad excepteur cillum exercitation sit.\r\n",
        registered: "2017-11-21T05:52:53 -01:00",
        latitude: 71.679143,
        longitude: 102.069815,
        tags: &["in", "proident", "adipisicing", "qui", "elit", "Lorem", "Lorem"],
        friends: &[
            Friend { id: 0, name: "Pacheco Perry" },
            Friend { id: 1, name: "Carla Whitney" },
            Friend { id: 2, name: "Enid Dawson" },
        ],
        greeting: "Hello, Dorsey Cooper! You have 4 unread messages.",
        favorite_fruit: "strawberry",
    },
    Person {
        id: "605d04bf2aab957c1875738b",
        index: 2,
        guid: "d1269c6c-f953-4717-a184-fbbbd76a53a8",
        is_active: true,
        balance: "$3,763.27",
        picture: PICTURE,
        age: 22,
        eye_color: "blue",
        name: "Nettie Moses",
        gender: "female",
        company: "GOLOGY",
        email: "nettiemoses@gology.com",
        phone: "+1 (999) 565-3024",
        address: "556 Coleman Street, Hendersonville, Kansas, 5859",
        about: "Proident culpa proident nisi deserunt enim culpa eiusmod mollit id. Est et sunt ullamco do non irure mollit aliquip cillum minim voluptate dolore velit. Nulla est aute ut fugiat duis. Duis cupidatat sint consequat proident. Minim commodo excepteur velit culpa laborum nulla. Ea officia esse irure ex tempor ut sunt eiusmod et eu nulla ullamco.\r\n",
        registered: "2021-01-23T04:32:15 -01:00",
        latitude: 41.733675,
        longitude: 138.518869,
        tags: &["tempor", "consequat", "sit", "culpa", "sunt", "dolore", "fugiat"],
        friends: &[
            Friend { id: 0, name: "Blackburn Alford" },
            Friend { id: 1, name: "Pennington Hudson" },
            Friend { id: 2, name: "Ila Evans" },
        ],
        greeting: "Hello, Nettie Moses! You have 9 unread messages.",
        favorite_fruit: "strawberry",
    },
    Person {
        id: "605d04bf8e6788df0a4afdb5",
        index: 3,
        guid: "3a030a18-89eb-4f3c-b042-3d6db55dc5e9",
        is_active: true,
        balance: "$3,845.23",
        picture: PICTURE,
        age: 28,
        eye_color: "brown",
        name: "Perkins Riggs",
        gender: "male",
        company: "HARMONEY",
        email: "perkinsriggs@harmoney.com",
        phone: "+1 (986) 400-3166",
        address: "724 Lee Avenue, Darlington, Georgia, 5677",
        about: "Cupidatat deserunt et ipsum excepteur mollit tempor adipisicing dolor minim aliquip. Consectetur id veniam nulla officia occaecat consectetur magna exercitation esse id. Ad aute reprehenderit minim aliquip minim consequat laboris non anim velit anim nisi esse et. Est esse mollit dolore cillum nulla. Exercitation ea mollit occaecat enim quis fugiat voluptate anim id exercitation id. Anim incididunt reprehenderit reprehenderit fugiat deserunt. Fugiat ullamco voluptate officia ullamco est sunt in proident fugiat.\r\n",
        registered: "2014-12-18T01:43:59 -01:00",
        latitude: -69.927037,
        longitude: 49.980806,
        tags: &["tempor", "mollit", "nostrud", "esse", "officia", "cupidatat", "fugiat"],
        friends: &[
            Friend { id: 0, name: "Russo Giles" },
            Friend { id: 1, name: "Adeline Frank" },
            Friend { id: 2, name: "Foster Ross" },
        ],
        greeting: "Hello, Perkins Riggs! You have 8 unread messages.",
        favorite_fruit: "banana",
    },
    Person {
        id: "605d04bf3b0b2d2eccc8205b",
        index: 4,
        guid: "17942a08-84ab-44d6-b2d2-49e1e4a5ecfd",
        is_active: false,
        balance: "$2,873.75",
        picture: PICTURE,
        age: 27,
        eye_color: "brown",
        name: "Adela Hewitt",
        gender: "female",
        company: "SYNKGEN",
        email: "adelahewitt@synkgen.com",
        phone: "+1 (984) 516-3612",
        address: "718 Box Street, Hartsville/Hartley, Wyoming, 221",
        about: "Occaecat qui sunt labore duis ut. Veniam aliquip ipsum deserunt ex voluptate dolor laboris commodo sunt excepteur dolor irure. Qui reprehenderit cillum labore dolore mollit deserunt et in. Fugiat minim ullamco sint nostrud et elit ullamco nisi sit. In mollit reprehenderit officia eu irure enim occaecat occaecat id sint occaecat reprehenderit. Reprehenderit adipisicing nostrud excepteur anim irure nulla laboris nostrud adipisicing veniam ipsum elit aliqua. Proident aliquip minim esse est aliqua laboris est officia ea consequat consectetur est non ad.\r\n",
        registered: "2015-06-20T04:18:46 -02:00",
        latitude: 11.283114,
        longitude: 154.905736,
        tags: &["laboris", "sint", "excepteur", "anim", "incididunt", "consectetur", "cupidatat"],
        friends: &[
            Friend { id: 0, name: "Johnston Wise" },
            Friend { id: 1, name: "Erika Spencer" },
            Friend { id: 2, name: "Hutchinson Pacheco" },
        ],
        greeting: "Hello, Adela Hewitt! You have 7 unread messages.",
        favorite_fruit: "apple",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::testing::FixedSource;

    #[test]
    fn test_slow_json_wire_format() {
        let source = FixedSource::new(0);
        let body = slow_json(&source).unwrap();
        assert!(body.starts_with(
            r#"[{"id":4,"someText":"883e11ad-0291-44cb-908b-6e18fd9b3888"},{"id":5,"someText":""#
        ));
        assert!(body.ends_with(r#""}]"#));
        assert!(!body.contains('\n'));
    }

    #[test]
    fn test_long_json_is_pretty_printed_with_stamp() {
        let source = FixedSource::new(1_616_000_000_123);
        let body = long_json(&source).unwrap();
        assert!(body.starts_with("[\n  {\n    \"_id\": \"1616000000123\",\n    \"index\": 0,\n"));
        assert!(body.contains("\"latitude\": 27.946368,\n    \"longitude\": 45.30655,"));
        assert!(body.contains("tempor duis.\\r\\n\","));
        assert!(body.ends_with("    \"favoriteFruit\": \"apple\"\n  }\n]"));
    }

    #[test]
    fn test_long_json_only_first_id_varies() {
        let a: serde_json::Value =
            serde_json::from_str(&long_json(&FixedSource::new(1)).unwrap()).unwrap();
        let b: serde_json::Value =
            serde_json::from_str(&long_json(&FixedSource::new(2)).unwrap()).unwrap();
        assert_eq!(a[0]["_id"], "1");
        assert_eq!(b[0]["_id"], "2");
        for i in 1..5 {
            assert_eq!(a[i], b[i]);
        }
        let mut a0 = a[0].clone();
        a0["_id"] = b[0]["_id"].clone();
        assert_eq!(a0, b[0]);
    }
}
