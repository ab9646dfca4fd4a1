use bson::oid::ObjectId;
use serde::Deserialize;

///
/// Room requested when creating booking or changing room
///
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRoom {
    #[serde(with = "de_object_id")]
    pub room_id: ObjectId,
}

mod de_object_id {
    //!
    //! bson serializes ObjectId as extended JSON `{"$oid": ...}`,
    //! clients send plain hex strings instead
    //!

    use bson::oid::ObjectId;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<ObjectId, D::Error> {
        let string = String::deserialize(d)?;
        let id = ObjectId::parse_str(string).map_err(serde::de::Error::custom)?;

        Ok(id)
    }
}
