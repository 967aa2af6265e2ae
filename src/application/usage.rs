//! Usage synopsis printed on every fatal error

pub const USAGE: &str = "\
Usage: spark [VERB] [OBJECT] [IDENTIFIER] <data>

  VERBS:
    -l, --list    OBJECT   [IDENTIFIER]     List OBJECTs of a room, person, ..
    -c, --create  OBJECT   [IDENTIFIER]     Create OBJECT for a recipient, name, ..
    -d, --delete  OBJECT   [IDENTIFIER]     Delete OBJECT by id or room name

  OBJECTS (exact name or unambiguous prefix):
    message(s)                             Messages posted to a room
    room(s)                                Rooms you are subscribed to
    people, person                         People in your organization
    membership(s)                          Room subscriptions

  PARAMETERS:
    -a, --auth     TOKEN                   Access token, defaults to $SPARK_AUTH
    -i, --id       IDENTIFIER              Room id/title, message id or email
    -v, --verbose                          Log requests and responses
        --config   PATH                    YAML file with auth.token and api settings
    -h, --help                             Show this information

  SUPPORTED COMMANDS:
    list    message, room, people, membership
    create  message, room, membership
    delete  message, room

Examples:
  export SPARK_AUTH=<token from https://developer.ciscospark.com>

  spark --list   rooms                               Show subscribed rooms
  spark --list   messages --id 'Hackers Corner'      Show messages posted to 'Hackers Corner'
  spark --list   people   --id pwahlman@cisco.com    Show details for a mail address
  spark --list   people   petter                     Show people whose name starts with 'petter'
  spark --list   people   --id me                    Show information about yourself
  spark --list   membership --id ROOM_HASH           Show who is in a room
  spark --create message  --id pwahlman@cisco.com hi Send a personal message
  spark --create message  --id 'Hackers Corner' hi   Send a message to a room
  spark --create room     'Hackers Corner'           Create a room
  spark --create membership --id ROOM_HASH a@b.com   Add someone to a room
  spark --delete room     --id 'Deleteme'            Delete a room (owner/admin)
  spark --delete message  --id HASH                  Delete a message by id
";
